//! Terminal rendering of boards.
//!
//! A board is drawn as one table per swimlane with the swimlane's lists as
//! columns and their cards stacked underneath, all in position order.
//! Selected items carry a `*` marker.

use super::context::ViewContext;
use super::entity::{Board, BoardTree, Item, SwimlaneTree};
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn boards(boards: &[Board]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION"]);
        for board in boards {
            table.add_row(row![board.id, board.name, board.description]);
        }
        table.printstd();
    }

    /// Applied migrations as `(version, name, applied_at)`.
    pub fn migrations(history: &[(u32, String, String)]) {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED"]);
        for (version, name, applied_at) in history {
            table.add_row(row![format!("v{}", version), name, applied_at]);
        }
        table.printstd();
    }

    pub fn board(tree: &BoardTree, context: &ViewContext) {
        print!("{}", Self::render_board(tree, context));
    }

    /// Renders the whole board into a string.
    pub fn render_board(tree: &BoardTree, context: &ViewContext) -> String {
        let mut out = format!("{} (#{})\n", tree.board.name, tree.board.id);
        if !tree.board.description.is_empty() {
            out.push_str(&tree.board.description);
            out.push('\n');
        }

        for lane in &tree.swimlanes {
            out.push('\n');
            out.push_str(&Self::label(Item::Swimlane(lane.swimlane.id), &lane.swimlane.name, context));
            out.push('\n');
            out.push_str(&Self::swimlane_table(lane, context).to_string());
        }

        out
    }

    fn swimlane_table(lane: &SwimlaneTree, context: &ViewContext) -> Table {
        let mut table = Table::new();

        if lane.lists.is_empty() {
            table.add_row(row!["(no lists)"]);
            return table;
        }

        table.set_titles(Row::new(
            lane.lists
                .iter()
                .map(|l| Cell::new(&Self::label(Item::List(l.list.id), &l.list.name, context)))
                .collect(),
        ));

        let depth = lane.lists.iter().map(|l| l.cards.len()).max().unwrap_or(0);
        for i in 0..depth {
            let cells = lane
                .lists
                .iter()
                .map(|l| match l.cards.get(i) {
                    Some(card) => {
                        let mut text = Self::label(Item::Card(card.id), &card.title, context);
                        if card.has_attachment() {
                            text.push_str(" [img]");
                        }
                        Cell::new(&text)
                    }
                    None => Cell::new(""),
                })
                .collect();
            table.add_row(Row::new(cells));
        }

        table
    }

    fn label(item: Item, name: &str, context: &ViewContext) -> String {
        let marker = if context.is_selected(item) { "*" } else { "" };
        format!("{}#{} {}", marker, item.id(), name)
    }
}
