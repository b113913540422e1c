#[cfg(test)]
mod tests {
    use lanes::libs::entity::{Id, Item};
    use lanes::libs::kanban::Kanban;
    use lanes::libs::moves::MoveOutcome;
    use test_context::{test_context, TestContext};

    /// A list holding cards `A`, `B`, `C` at positions 0, 1, 2.
    struct ReorderTestContext {
        kanban: Kanban,
        swimlane: Id,
        list: Id,
        cards: [Id; 3],
    }

    impl TestContext for ReorderTestContext {
        fn setup() -> Self {
            let mut kanban = Kanban::open_in_memory().unwrap();
            let board = kanban.create_board("Roadmap", "").unwrap();
            let swimlane = kanban.create_swimlane(board, "Main").unwrap();
            let list = kanban.create_list(swimlane, "Todo").unwrap();
            let a = kanban.create_card(list, "A", "").unwrap();
            let b = kanban.create_card(list, "B", "").unwrap();
            let c = kanban.create_card(list, "C", "").unwrap();
            ReorderTestContext {
                kanban,
                swimlane,
                list,
                cards: [a, b, c],
            }
        }
    }

    fn order(kanban: &Kanban, list: Id) -> Vec<(String, i64)> {
        kanban.cards(list).unwrap().into_iter().map(|c| (c.title, c.position)).collect()
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_last_card_to_front(ctx: &mut ReorderTestContext) {
        let [_, _, c] = ctx.cards;

        let outcome = ctx.kanban.reorder_to(Item::Card(c), 0).unwrap();
        assert_eq!(outcome, MoveOutcome::Reordered { item: Item::Card(c), position: 0 });
        assert_eq!(
            order(&ctx.kanban, ctx.list),
            vec![("C".to_string(), 0), ("A".to_string(), 1), ("B".to_string(), 2)]
        );
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_first_card_to_middle(ctx: &mut ReorderTestContext) {
        let [a, _, _] = ctx.cards;

        ctx.kanban.reorder_to(Item::Card(a), 1).unwrap();
        assert_eq!(
            order(&ctx.kanban, ctx.list),
            vec![("B".to_string(), 0), ("A".to_string(), 1), ("C".to_string(), 2)]
        );
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_out_of_range_targets_are_clamped(ctx: &mut ReorderTestContext) {
        let [a, _, c] = ctx.cards;

        ctx.kanban.reorder_to(Item::Card(a), 99).unwrap();
        assert_eq!(
            order(&ctx.kanban, ctx.list),
            vec![("B".to_string(), 0), ("C".to_string(), 1), ("A".to_string(), 2)]
        );

        ctx.kanban.reorder_to(Item::Card(c), -5).unwrap();
        assert_eq!(
            order(&ctx.kanban, ctx.list),
            vec![("C".to_string(), 0), ("B".to_string(), 1), ("A".to_string(), 2)]
        );
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_reorder_to_current_index_is_noop(ctx: &mut ReorderTestContext) {
        let [_, b, _] = ctx.cards;

        assert_eq!(ctx.kanban.reorder_to(Item::Card(b), 1).unwrap(), MoveOutcome::NoOp);
        assert_eq!(ctx.kanban.reorder_to(Item::Card(4242), 0).unwrap(), MoveOutcome::NoOp);
    }

    #[test_context(ReorderTestContext)]
    #[test]
    fn test_reorder_lists_and_swimlanes(ctx: &mut ReorderTestContext) {
        let board = ctx.kanban.swimlane(ctx.swimlane).unwrap().unwrap().board_id;
        let doing = ctx.kanban.create_list(ctx.swimlane, "Doing").unwrap();
        ctx.kanban.reorder_to(Item::List(doing), 0).unwrap();

        let lists: Vec<_> = ctx.kanban.lists(ctx.swimlane).unwrap().into_iter().map(|l| (l.name, l.position)).collect();
        assert_eq!(lists, vec![("Doing".to_string(), 0), ("Todo".to_string(), 1)]);

        let later = ctx.kanban.create_swimlane(board, "Later").unwrap();
        ctx.kanban.reorder_to(Item::Swimlane(later), 0).unwrap();
        let lanes: Vec<_> = ctx.kanban.swimlanes(board).unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(lanes, vec!["Later", "Main"]);
    }
}
