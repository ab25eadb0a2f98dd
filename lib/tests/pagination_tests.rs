use buch_client::pagination::Pagination;

#[test]
fn test_total_pages_unknown_until_total_is_set() {
    let pagination = Pagination::new(10);
    assert_eq!(pagination.total_pages(), None);
}

#[test]
fn test_total_pages_is_ceiling_of_total_over_page_size() {
    let mut pagination = Pagination::new(10);

    pagination.set_total(100);
    assert_eq!(pagination.total_pages(), Some(10));

    pagination.set_total(101);
    assert_eq!(pagination.total_pages(), Some(11));

    pagination.set_total(9);
    assert_eq!(pagination.total_pages(), Some(1));
}

#[test]
fn test_total_pages_is_at_least_one_once_total_is_known() {
    let mut pagination = Pagination::new(10);
    pagination.set_total(0);
    assert_eq!(pagination.total_pages(), Some(1));
}

#[test]
fn test_goto_page_clamps_at_both_boundaries() {
    let mut pagination = Pagination::new(10);
    pagination.set_total(35);
    assert_eq!(pagination.total_pages(), Some(4));

    pagination.goto_page(0);
    assert_eq!(pagination.page, 1);

    pagination.goto_page(99);
    assert_eq!(pagination.page, 4);

    // idempotent at the boundary
    pagination.goto_page(99);
    assert_eq!(pagination.page, 4);

    pagination.goto_page(2);
    assert_eq!(pagination.page, 2);
}

#[test]
fn test_goto_page_is_a_no_op_before_the_total_is_known() {
    let mut pagination = Pagination::new(10);
    pagination.goto_page(7);
    assert_eq!(pagination.page, 1);
}

#[test]
fn test_shrinking_total_pulls_the_current_page_back() {
    let mut pagination = Pagination::new(10);
    pagination.set_total(50);
    pagination.goto_page(5);
    assert_eq!(pagination.page, 5);

    pagination.set_total(12);
    assert_eq!(pagination.total_pages(), Some(2));
    assert_eq!(pagination.page, 2);
}

#[test]
fn test_reset_returns_to_page_one_and_forgets_the_total() {
    let mut pagination = Pagination::new(10);
    pagination.set_total(50);
    pagination.goto_page(3);

    pagination.reset();
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.total, None);
    assert_eq!(pagination.total_pages(), None);
}
