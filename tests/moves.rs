#[cfg(test)]
mod tests {
    use lanes::db::siblings::Siblings;
    use lanes::libs::entity::{Id, Item, Level};
    use lanes::libs::kanban::Kanban;
    use lanes::libs::moves::{Direction, MoveOutcome};
    use lanes::libs::position::is_dense;
    use test_context::{test_context, TestContext};

    /// One board with two swimlanes; the first holds lists `Todo` and `Done`.
    struct MoveTestContext {
        kanban: Kanban,
        board: Id,
        top: Id,
        bottom: Id,
        todo: Id,
        done: Id,
    }

    impl TestContext for MoveTestContext {
        fn setup() -> Self {
            let mut kanban = Kanban::open_in_memory().unwrap();
            let board = kanban.create_board("Roadmap", "").unwrap();
            let top = kanban.create_swimlane(board, "Top").unwrap();
            let bottom = kanban.create_swimlane(board, "Bottom").unwrap();
            let todo = kanban.create_list(top, "Todo").unwrap();
            let done = kanban.create_list(top, "Done").unwrap();
            MoveTestContext {
                kanban,
                board,
                top,
                bottom,
                todo,
                done,
            }
        }
    }

    fn card_titles(kanban: &Kanban, list: Id) -> Vec<String> {
        kanban.cards(list).unwrap().into_iter().map(|c| c.title).collect()
    }

    fn list_names(kanban: &Kanban, swimlane: Id) -> Vec<String> {
        kanban.lists(swimlane).unwrap().into_iter().map(|l| l.name).collect()
    }

    fn assert_dense(kanban: &Kanban, level: Level, parent: Id) {
        let slots = Siblings::new(kanban.connection(), level).children(parent).unwrap();
        assert!(is_dense(&slots), "{:?} under #{} not dense: {:?}", level, parent, slots);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_card_swaps_within_list(ctx: &mut MoveTestContext) {
        let a = ctx.kanban.create_card(ctx.todo, "A", "").unwrap();
        let b = ctx.kanban.create_card(ctx.todo, "B", "").unwrap();
        ctx.kanban.create_card(ctx.todo, "C", "").unwrap();

        let outcome = ctx.kanban.move_item(Item::Card(b), Direction::Up).unwrap();
        assert_eq!(outcome, MoveOutcome::Swapped { item: Item::Card(b), with: a });
        assert_eq!(card_titles(&ctx.kanban, ctx.todo), vec!["B", "A", "C"]);
        assert_dense(&ctx.kanban, Level::Card, ctx.todo);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_card_boundaries_are_noops(ctx: &mut MoveTestContext) {
        let a = ctx.kanban.create_card(ctx.todo, "A", "").unwrap();
        let b = ctx.kanban.create_card(ctx.todo, "B", "").unwrap();

        assert_eq!(ctx.kanban.move_item(Item::Card(a), Direction::Up).unwrap(), MoveOutcome::NoOp);
        assert_eq!(ctx.kanban.move_item(Item::Card(b), Direction::Down).unwrap(), MoveOutcome::NoOp);
        assert_eq!(card_titles(&ctx.kanban, ctx.todo), vec!["A", "B"]);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_swap_round_trip(ctx: &mut MoveTestContext) {
        ctx.kanban.create_card(ctx.todo, "A", "").unwrap();
        let b = ctx.kanban.create_card(ctx.todo, "B", "").unwrap();
        ctx.kanban.create_card(ctx.todo, "C", "").unwrap();
        let before = ctx.kanban.cards(ctx.todo).unwrap();

        assert!(ctx.kanban.move_item(Item::Card(b), Direction::Down).unwrap().changed());
        assert!(ctx.kanban.move_item(Item::Card(b), Direction::Up).unwrap().changed());

        assert_eq!(ctx.kanban.cards(ctx.todo).unwrap(), before);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_card_moves_to_adjacent_list(ctx: &mut MoveTestContext) {
        let a = ctx.kanban.create_card(ctx.todo, "A", "").unwrap();
        ctx.kanban.create_card(ctx.todo, "B", "").unwrap();
        ctx.kanban.create_card(ctx.done, "X", "").unwrap();

        let outcome = ctx.kanban.move_item(Item::Card(a), Direction::Right).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Reparented {
                item: Item::Card(a),
                from: ctx.todo,
                to: ctx.done,
                position: 1,
            }
        );

        assert_eq!(card_titles(&ctx.kanban, ctx.todo), vec!["B"]);
        assert_eq!(card_titles(&ctx.kanban, ctx.done), vec!["X", "A"]);
        assert_dense(&ctx.kanban, Level::Card, ctx.todo);
        assert_dense(&ctx.kanban, Level::Card, ctx.done);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_card_in_outermost_list_stays(ctx: &mut MoveTestContext) {
        let a = ctx.kanban.create_card(ctx.todo, "A", "").unwrap();
        let x = ctx.kanban.create_card(ctx.done, "X", "").unwrap();

        assert_eq!(ctx.kanban.move_item(Item::Card(a), Direction::Left).unwrap(), MoveOutcome::NoOp);
        assert_eq!(ctx.kanban.move_item(Item::Card(x), Direction::Right).unwrap(), MoveOutcome::NoOp);
        assert_eq!(ctx.kanban.card(a).unwrap().unwrap().list_id, ctx.todo);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_list_swaps_sideways(ctx: &mut MoveTestContext) {
        let outcome = ctx.kanban.move_item(Item::List(ctx.done), Direction::Left).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Swapped {
                item: Item::List(ctx.done),
                with: ctx.todo,
            }
        );
        assert_eq!(list_names(&ctx.kanban, ctx.top), vec!["Done", "Todo"]);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_list_moves_to_swimlane_above(ctx: &mut MoveTestContext) {
        let review = ctx.kanban.create_list(ctx.bottom, "Review").unwrap();

        let outcome = ctx.kanban.move_item(Item::List(review), Direction::Up).unwrap();
        assert!(matches!(outcome, MoveOutcome::Reparented { to, position: 2, .. } if to == ctx.top));

        assert_eq!(list_names(&ctx.kanban, ctx.top), vec!["Todo", "Done", "Review"]);
        assert!(ctx.kanban.lists(ctx.bottom).unwrap().is_empty());
        assert_dense(&ctx.kanban, Level::List, ctx.top);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_last_list_in_last_swimlane_cannot_move_down(ctx: &mut MoveTestContext) {
        let review = ctx.kanban.create_list(ctx.bottom, "Review").unwrap();

        assert_eq!(ctx.kanban.move_item(Item::List(review), Direction::Down).unwrap(), MoveOutcome::NoOp);
        assert_eq!(list_names(&ctx.kanban, ctx.bottom), vec!["Review"]);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_list_down_then_up_compacts_source(ctx: &mut MoveTestContext) {
        ctx.kanban.move_item(Item::List(ctx.todo), Direction::Down).unwrap();

        assert_eq!(list_names(&ctx.kanban, ctx.top), vec!["Done"]);
        assert_eq!(list_names(&ctx.kanban, ctx.bottom), vec!["Todo"]);
        assert_dense(&ctx.kanban, Level::List, ctx.top);

        ctx.kanban.move_item(Item::List(ctx.todo), Direction::Up).unwrap();
        assert_eq!(list_names(&ctx.kanban, ctx.top), vec!["Done", "Todo"]);
        assert_dense(&ctx.kanban, Level::List, ctx.top);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_swimlane_moves(ctx: &mut MoveTestContext) {
        assert_eq!(ctx.kanban.move_item(Item::Swimlane(ctx.top), Direction::Up).unwrap(), MoveOutcome::NoOp);
        assert_eq!(ctx.kanban.move_item(Item::Swimlane(ctx.top), Direction::Left).unwrap(), MoveOutcome::NoOp);
        assert_eq!(ctx.kanban.move_item(Item::Swimlane(ctx.top), Direction::Right).unwrap(), MoveOutcome::NoOp);

        ctx.kanban.move_item(Item::Swimlane(ctx.top), Direction::Down).unwrap();
        let names: Vec<_> = ctx.kanban.swimlanes(ctx.board).unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Bottom", "Top"]);
        assert_dense(&ctx.kanban, Level::Swimlane, ctx.board);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_drop_card_onto_list(ctx: &mut MoveTestContext) {
        let a = ctx.kanban.create_card(ctx.todo, "A", "").unwrap();
        ctx.kanban.create_card(ctx.todo, "B", "").unwrap();
        let review = ctx.kanban.create_list(ctx.bottom, "Review").unwrap();

        let outcome = ctx.kanban.move_to_parent(Item::Card(a), review).unwrap();
        assert!(matches!(outcome, MoveOutcome::Reparented { position: 0, .. }));
        assert_eq!(card_titles(&ctx.kanban, review), vec!["A"]);
        assert_eq!(card_titles(&ctx.kanban, ctx.todo), vec!["B"]);
        assert_dense(&ctx.kanban, Level::Card, ctx.todo);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_drop_onto_same_or_missing_parent(ctx: &mut MoveTestContext) {
        let a = ctx.kanban.create_card(ctx.todo, "A", "").unwrap();

        assert_eq!(ctx.kanban.move_to_parent(Item::Card(a), ctx.todo).unwrap(), MoveOutcome::NoOp);
        assert_eq!(ctx.kanban.move_to_parent(Item::Card(a), 9999).unwrap(), MoveOutcome::NoOp);
        assert_eq!(ctx.kanban.move_to_parent(Item::List(ctx.todo), 9999).unwrap(), MoveOutcome::NoOp);
        assert_eq!(ctx.kanban.card(a).unwrap().unwrap().list_id, ctx.todo);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_missing_item_is_noop(ctx: &mut MoveTestContext) {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(ctx.kanban.move_item(Item::Card(4242), direction).unwrap(), MoveOutcome::NoOp);
            assert_eq!(ctx.kanban.move_item(Item::List(4242), direction).unwrap(), MoveOutcome::NoOp);
        }
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_drop_list_onto_other_board(ctx: &mut MoveTestContext) {
        let other = ctx.kanban.create_board("Backlog", "").unwrap();
        let lane = ctx.kanban.create_swimlane(other, "Ideas").unwrap();

        assert_eq!(ctx.kanban.board_of(Item::List(ctx.todo)).unwrap(), Some(ctx.board));
        assert!(ctx.kanban.move_to_parent(Item::List(ctx.todo), lane).unwrap().changed());

        assert_eq!(ctx.kanban.board_of(Item::List(ctx.todo)).unwrap(), Some(other));
        assert_eq!(list_names(&ctx.kanban, ctx.top), vec!["Done"]);
        assert_dense(&ctx.kanban, Level::List, ctx.top);
    }

    #[test_context(MoveTestContext)]
    #[test]
    fn test_failed_reparent_rolls_back(ctx: &mut MoveTestContext) {
        let a = ctx.kanban.create_card(ctx.todo, "A", "").unwrap();
        ctx.kanban.create_card(ctx.todo, "B", "").unwrap();

        // Compaction of the source list succeeds, then the reparent is refused.
        ctx.kanban
            .connection()
            .execute_batch(
                "CREATE TRIGGER refuse_reparent BEFORE UPDATE OF list_id ON cards
                 BEGIN SELECT RAISE(ABORT, 'reparent refused'); END;",
            )
            .unwrap();

        assert!(ctx.kanban.move_item(Item::Card(a), Direction::Right).is_err());

        let source: Vec<_> = ctx.kanban.cards(ctx.todo).unwrap().into_iter().map(|c| (c.title, c.position)).collect();
        assert_eq!(source, vec![("A".to_string(), 0), ("B".to_string(), 1)]);
        assert!(ctx.kanban.cards(ctx.done).unwrap().is_empty());
    }
}
