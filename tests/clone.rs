#[cfg(test)]
mod tests {
    use lanes::db::siblings::Siblings;
    use lanes::libs::entity::{BoardTree, Id, Item, Level};
    use lanes::libs::kanban::Kanban;
    use lanes::libs::position::is_dense;
    use test_context::{test_context, TestContext};

    /// Board with swimlanes `Top` and `Bottom`; `Top` holds list `Todo`
    /// with cards `A`, `B`, `C`.
    struct CloneTestContext {
        kanban: Kanban,
        board: Id,
        top: Id,
        todo: Id,
        cards: Vec<Id>,
    }

    impl TestContext for CloneTestContext {
        fn setup() -> Self {
            let mut kanban = Kanban::open_in_memory().unwrap();
            let board = kanban.create_board("Roadmap", "Q3 plan").unwrap();
            let top = kanban.create_swimlane(board, "Top").unwrap();
            kanban.create_swimlane(board, "Bottom").unwrap();
            let todo = kanban.create_list(top, "Todo").unwrap();
            let cards = ["A", "B", "C"]
                .iter()
                .map(|title| kanban.create_card(todo, title, "details").unwrap())
                .collect();
            CloneTestContext {
                kanban,
                board,
                top,
                todo,
                cards,
            }
        }
    }

    fn swimlane_names(kanban: &Kanban, board: Id) -> Vec<(String, i64)> {
        kanban.swimlanes(board).unwrap().into_iter().map(|s| (s.name, s.position)).collect()
    }

    #[test_context(CloneTestContext)]
    #[test]
    fn test_clone_swimlane_lands_after_source(ctx: &mut CloneTestContext) {
        let copy = ctx.kanban.clone_item(Item::Swimlane(ctx.top)).unwrap().unwrap();

        assert_eq!(
            swimlane_names(&ctx.kanban, ctx.board),
            vec![
                ("Top".to_string(), 0),
                ("Top (Copy)".to_string(), 1),
                ("Bottom".to_string(), 2)
            ]
        );

        let lists = ctx.kanban.lists(copy).unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "Todo");

        let titles: Vec<_> = ctx.kanban.cards(lists[0].id).unwrap().into_iter().map(|c| (c.title, c.position)).collect();
        assert_eq!(
            titles,
            vec![("A".to_string(), 0), ("B".to_string(), 1), ("C".to_string(), 2)]
        );
    }

    #[test_context(CloneTestContext)]
    #[test]
    fn test_clone_list_appends_to_swimlane(ctx: &mut CloneTestContext) {
        ctx.kanban.create_list(ctx.top, "Done").unwrap();
        let copy = ctx.kanban.clone_item(Item::List(ctx.todo)).unwrap().unwrap();

        let lists: Vec<_> = ctx.kanban.lists(ctx.top).unwrap().into_iter().map(|l| (l.name, l.position)).collect();
        assert_eq!(
            lists,
            vec![
                ("Todo".to_string(), 0),
                ("Done".to_string(), 1),
                ("Todo (Copy)".to_string(), 2)
            ]
        );
        assert_eq!(ctx.kanban.cards(copy).unwrap().len(), 3);
        assert_eq!(ctx.kanban.cards(ctx.todo).unwrap().len(), 3);
    }

    #[test_context(CloneTestContext)]
    #[test]
    fn test_clone_card_copies_fields(ctx: &mut CloneTestContext) {
        let source = ctx.cards[0];
        ctx.kanban.set_attachment(source, Some(&[1u8, 2, 3][..])).unwrap();

        let copy = ctx.kanban.clone_item(Item::Card(source)).unwrap().unwrap();
        let card = ctx.kanban.card(copy).unwrap().unwrap();

        assert_eq!(card.title, "A (Copy)");
        assert_eq!(card.description, "details");
        assert_eq!(card.position, 3);
        assert_eq!(card.list_id, ctx.todo);
        assert_eq!(card.attachment, Some(vec![1, 2, 3]));
    }

    #[test_context(CloneTestContext)]
    #[test]
    fn test_clone_board_preserves_order(ctx: &mut CloneTestContext) {
        // Shuffle first so the copy has to reproduce a non-creation order.
        ctx.kanban.reorder_to(Item::Card(ctx.cards[2]), 0).unwrap();

        let copy = ctx.kanban.clone_board(ctx.board).unwrap().unwrap();
        let source = ctx.kanban.load_board(ctx.board).unwrap().unwrap();
        let cloned = ctx.kanban.load_board(copy).unwrap().unwrap();

        assert_eq!(cloned.board.name, "Roadmap (Copy)");
        assert_eq!(cloned.board.description, "Q3 plan");
        assert_eq!(cloned.card_count(), source.card_count());

        let lane_names = |tree: &BoardTree| -> Vec<String> { tree.swimlanes.iter().map(|s| s.swimlane.name.clone()).collect() };
        assert_eq!(lane_names(&cloned), lane_names(&source));

        let titles: Vec<_> = cloned.swimlanes[0].lists[0].cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test_context(CloneTestContext)]
    #[test]
    fn test_clone_missing_is_none(ctx: &mut CloneTestContext) {
        assert_eq!(ctx.kanban.clone_board(4242).unwrap(), None);
        assert_eq!(ctx.kanban.clone_item(Item::Swimlane(4242)).unwrap(), None);
        assert_eq!(ctx.kanban.clone_item(Item::List(4242)).unwrap(), None);
        assert_eq!(ctx.kanban.clone_item(Item::Card(4242)).unwrap(), None);
    }

    #[test_context(CloneTestContext)]
    #[test]
    fn test_clone_list_compacts_gapped_cards(ctx: &mut CloneTestContext) {
        ctx.kanban.connection().execute("UPDATE cards SET position = position * 5", []).unwrap();

        let copy = ctx.kanban.clone_item(Item::List(ctx.todo)).unwrap().unwrap();

        let titles: Vec<_> = ctx.kanban.cards(copy).unwrap().into_iter().map(|c| (c.title, c.position)).collect();
        assert_eq!(
            titles,
            vec![("A".to_string(), 0), ("B".to_string(), 1), ("C".to_string(), 2)]
        );
        assert!(is_dense(&Siblings::new(ctx.kanban.connection(), Level::Card).children(copy).unwrap()));
    }
}
