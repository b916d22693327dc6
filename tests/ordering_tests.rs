mod common;

#[cfg(test)]
pub mod ordering_tests {
    use super::common::*;

    use sitebloom::models::SectionType;
    use sitebloom::ordering::{
        drag, next_position, shift, Direction, OrderingError,
    };
    use uuid::Uuid;

    fn three_pages() -> Vec<sitebloom::models::Page> {
        let site_id = Uuid::new_v4();
        vec![
            make_page(site_id, "A", "a", 0),
            make_page(site_id, "B", "b", 1),
            make_page(site_id, "C", "c", 2),
        ]
    }

    #[test]
    fn test_shift_up_swaps_exactly_two_order_values() {
        let pages = three_pages();
        let (a, b) = (pages[0].id, pages[1].id);

        let changes = shift(&pages, b, Direction::Up).unwrap();

        assert_eq!(changes[0].id, a);
        assert_eq!(changes[0].position, 1);
        assert_eq!(changes[1].id, b);
        assert_eq!(changes[1].position, 0);
    }

    #[test]
    fn test_shift_up_at_top_is_rejected() {
        let pages = three_pages();
        let a = pages[0].id;

        let result = shift(&pages, a, Direction::Up);

        assert_eq!(result.unwrap_err(), OrderingError::InvalidMove);
    }

    #[test]
    fn test_shift_down_at_bottom_is_rejected() {
        let pages = three_pages();
        let c = pages[2].id;

        let result = shift(&pages, c, Direction::Down);

        assert_eq!(result.unwrap_err(), OrderingError::InvalidMove);
    }

    #[test]
    fn test_shift_unknown_id_is_rejected() {
        let pages = three_pages();
        let ghost = Uuid::new_v4();

        let result = shift(&pages, ghost, Direction::Down);

        assert_eq!(result.unwrap_err(), OrderingError::UnknownItem(ghost));
    }

    #[test]
    fn test_shift_preserves_gaps_in_untouched_orders() {
        let site_id = Uuid::new_v4();
        let pages = vec![
            make_page(site_id, "A", "a", 0),
            make_page(site_id, "B", "b", 5),
            make_page(site_id, "C", "c", 9),
        ];
        let (b, c) = (pages[1].id, pages[2].id);

        // Swapping B and C only exchanges 5 and 9; nothing is renumbered.
        let changes = shift(&pages, c, Direction::Up).unwrap();

        assert_eq!(changes[0].id, b);
        assert_eq!(changes[0].position, 9);
        assert_eq!(changes[1].id, c);
        assert_eq!(changes[1].position, 5);
    }

    #[test]
    fn test_drag_forward_lands_after_target() {
        let page_id = Uuid::new_v4();
        let sections: Vec<_> = (0..4)
            .map(|i| make_section(page_id, SectionType::Text, i, "{}"))
            .collect();
        let (a, b, c, d) = (
            sections[0].id,
            sections[1].id,
            sections[2].id,
            sections[3].id,
        );

        let changes = drag(&sections, a, d).unwrap();

        // Final sequence is B, C, D, A with contiguous orders.
        let position_of = |id: Uuid| {
            changes
                .iter()
                .find(|change| change.id == id)
                .map(|change| change.position)
        };
        assert_eq!(position_of(b), Some(0));
        assert_eq!(position_of(c), Some(1));
        assert_eq!(position_of(d), Some(2));
        assert_eq!(position_of(a), Some(3));
        assert_eq!(changes.len(), 4);
    }

    #[test]
    fn test_drag_backward_lands_before_target() {
        let page_id = Uuid::new_v4();
        let sections: Vec<_> = (0..4)
            .map(|i| make_section(page_id, SectionType::Text, i, "{}"))
            .collect();
        let (a, b, c, d) = (
            sections[0].id,
            sections[1].id,
            sections[2].id,
            sections[3].id,
        );

        let changes = drag(&sections, d, b).unwrap();

        // A stays at 0 and is not reported; D slots in before B.
        let position_of = |id: Uuid| {
            changes
                .iter()
                .find(|change| change.id == id)
                .map(|change| change.position)
        };
        assert_eq!(position_of(a), None);
        assert_eq!(position_of(d), Some(1));
        assert_eq!(position_of(b), Some(2));
        assert_eq!(position_of(c), Some(3));
    }

    #[test]
    fn test_drag_onto_itself_changes_nothing() {
        let pages = three_pages();
        let a = pages[0].id;

        let changes = drag(&pages, a, a).unwrap();

        assert!(changes.is_empty());
    }

    #[test]
    fn test_drag_unknown_target_is_rejected() {
        let pages = three_pages();
        let ghost = Uuid::new_v4();

        let result = drag(&pages, pages[0].id, ghost);

        assert_eq!(result.unwrap_err(), OrderingError::UnknownItem(ghost));
    }

    #[test]
    fn test_drag_renumbers_gapped_orders_contiguously() {
        let site_id = Uuid::new_v4();
        let pages = vec![
            make_page(site_id, "A", "a", 2),
            make_page(site_id, "B", "b", 7),
            make_page(site_id, "C", "c", 11),
        ];
        let (a, b, c) = (pages[0].id, pages[1].id, pages[2].id);

        let changes = drag(&pages, a, c).unwrap();

        let position_of = |id: Uuid| {
            changes
                .iter()
                .find(|change| change.id == id)
                .map(|change| change.position)
        };
        assert_eq!(position_of(b), Some(0));
        assert_eq!(position_of(c), Some(1));
        // A's old order already equals its new contiguous index, so it is
        // not part of the changed set.
        assert_eq!(position_of(a), None);
    }

    #[test]
    fn test_next_position_appends_after_max() {
        let pages = three_pages();

        assert_eq!(next_position(&pages), 3);
        assert_eq!(next_position(&Vec::<sitebloom::models::Page>::new()), 0);
    }
}
