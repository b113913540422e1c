use crate::libs::entity::{Card, Id};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_CARD: &str = "INSERT INTO cards (list_id, title, description, position, created_at, attachment)
    VALUES (?1, ?2, ?3, ?4, datetime(CURRENT_TIMESTAMP, 'localtime'), ?5)";
const UPDATE_CARD: &str = "UPDATE cards SET title = ?2, description = ?3 WHERE id = ?1";
const UPDATE_ATTACHMENT: &str = "UPDATE cards SET attachment = ?2 WHERE id = ?1";
const SELECT_CARDS: &str = "SELECT id, list_id, title, description, position, created_at, attachment
    FROM cards WHERE list_id = ?1 ORDER BY position, id";
const SELECT_CARD_BY_ID: &str = "SELECT id, list_id, title, description, position, created_at, attachment
    FROM cards WHERE id = ?1";
const SELECT_BOARD_OF_CARD: &str = "
    SELECT s.board_id FROM cards c
    JOIN lists l ON l.id = c.list_id
    JOIN swimlanes s ON s.id = l.swimlane_id
    WHERE c.id = ?1
";

/// Field values for a card row that does not exist yet.
#[derive(Debug, Clone, Default)]
pub struct NewCard<'c> {
    pub title: &'c str,
    pub description: &'c str,
    pub attachment: Option<&'c [u8]>,
}

pub struct Cards<'a> {
    conn: &'a Connection,
}

impl<'a> Cards<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn insert(&self, list_id: Id, card: &NewCard, position: i64) -> Result<Id> {
        self.conn
            .execute(INSERT_CARD, params![list_id, card.title, card.description, position, card.attachment])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update(&self, id: Id, title: &str, description: &str) -> Result<usize> {
        Ok(self.conn.execute(UPDATE_CARD, params![id, title, description])?)
    }

    pub fn set_attachment(&self, id: Id, attachment: Option<&[u8]>) -> Result<usize> {
        Ok(self.conn.execute(UPDATE_ATTACHMENT, params![id, attachment])?)
    }

    pub fn by_list(&self, list_id: Id) -> Result<Vec<Card>> {
        let mut stmt = self.conn.prepare(SELECT_CARDS)?;
        let cards = stmt.query_map(params![list_id], map_card)?.collect::<Result<Vec<_>, _>>()?;

        Ok(cards)
    }

    pub fn get(&self, id: Id) -> Result<Option<Card>> {
        self.conn.query_row(SELECT_CARD_BY_ID, params![id], map_card).optional().map_err(Into::into)
    }

    pub fn board_of(&self, id: Id) -> Result<Option<Id>> {
        self.conn.query_row(SELECT_BOARD_OF_CARD, params![id], |row| row.get(0)).optional().map_err(Into::into)
    }
}

fn map_card(row: &Row) -> rusqlite::Result<Card> {
    Ok(Card {
        id: row.get(0)?,
        list_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        position: row.get(4)?,
        created_at: row.get(5)?,
        attachment: row.get(6)?,
    })
}
