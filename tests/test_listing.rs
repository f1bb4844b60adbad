//! Listing CRUD, ordering, photos and cascade integration tests

use mavmart_store::app::{
    account_create, account_delete, listing_create, listing_list, listing_list_for_seller,
    AccountCreateReq, ListingCreateReq,
};
use mavmart_store::domain::{
    Account, ItemCondition, ListingCategory, ListingStatus, NO_DESCRIPTION,
};
use mavmart_store::infra::{init_test_db, DbPool};

// ──────────────────────── Helpers ────────────────────────

fn seed_seller(pool: &DbPool, email: &str) -> Account {
    account_create(
        pool,
        AccountCreateReq {
            first: "Sam".to_string(),
            last: "Seller".to_string(),
            email: email.to_string(),
            credential: "pw".to_string(),
            role: None,
        },
    )
    .unwrap()
}

fn make_create_req(seller_id: i64, title: &str, created_at: i64) -> ListingCreateReq {
    ListingCreateReq {
        seller_id,
        title: title.to_string(),
        description: Some(format!("{title} in decent shape")),
        category: ListingCategory::Engineering,
        price_cents: 2500,
        condition: ItemCondition::Good,
        photos: vec![],
        status: None,
        created_at: Some(created_at),
    }
}

// ══════════════════════════════════════════════════════════
//  listing_create
// ══════════════════════════════════════════════════════════

#[test]
fn create_assigns_id_and_defaults() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");

    let l = listing_create(
        &pool,
        ListingCreateReq {
            seller_id: seller.id,
            title: "  TI-84 calculator ".to_string(),
            description: None,
            category: ListingCategory::General,
            price_cents: 1500,
            condition: ItemCondition::LikeNew,
            photos: vec![],
            status: None,
            created_at: None,
        },
    )
    .unwrap();

    assert!(l.id > 0);
    assert_eq!(l.title, "TI-84 calculator");
    assert_eq!(l.description, NO_DESCRIPTION);
    assert_eq!(l.status, ListingStatus::Active);
    assert!(l.created_at > 0);
}

#[test]
fn create_blank_description_normalized() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    let mut req = make_create_req(seller.id, "Lamp", 100);
    req.description = Some("   ".to_string());
    let l = listing_create(&pool, req).unwrap();
    assert_eq!(l.description, NO_DESCRIPTION);

    let reloaded = &listing_list(&pool).unwrap()[0];
    assert_eq!(reloaded.description, NO_DESCRIPTION);
}

#[test]
fn create_empty_title_fails() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    let err = listing_create(&pool, make_create_req(seller.id, "   ", 100));
    assert_eq!(err.unwrap_err().code(), "VALIDATION_ERROR");
}

#[test]
fn create_negative_price_fails() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    let mut req = make_create_req(seller.id, "Desk", 100);
    req.price_cents = -1;
    assert_eq!(listing_create(&pool, req).unwrap_err().code(), "VALIDATION_ERROR");
}

#[test]
fn create_for_unknown_seller_hits_foreign_key() {
    let pool = init_test_db();
    let err = listing_create(&pool, make_create_req(999, "Ghost chair", 100));
    assert_eq!(err.unwrap_err().code(), "DB_ERROR");
}

// ══════════════════════════════════════════════════════════
//  listing_list / listing_list_for_seller
// ══════════════════════════════════════════════════════════

#[test]
fn list_orders_newest_first() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    let l1 = listing_create(&pool, make_create_req(seller.id, "Old textbook", 100)).unwrap();
    let l2 = listing_create(&pool, make_create_req(seller.id, "New textbook", 200)).unwrap();

    let ids: Vec<i64> = listing_list(&pool).unwrap().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![l2.id, l1.id]);
}

#[test]
fn list_for_seller_filters_and_keeps_order() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    let other = seed_seller(&pool, "other@mavs.edu");
    let l1 = listing_create(&pool, make_create_req(seller.id, "Bike", 100)).unwrap();
    let l2 = listing_create(&pool, make_create_req(seller.id, "Helmet", 200)).unwrap();
    listing_create(&pool, make_create_req(other.id, "Skateboard", 150)).unwrap();

    let mine = listing_list_for_seller(&pool, seller.id).unwrap();
    let ids: Vec<i64> = mine.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![l2.id, l1.id]);
    assert!(mine.iter().all(|l| l.seller_id == seller.id));
}

#[test]
fn list_for_seller_with_no_listings_is_empty() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    assert!(listing_list_for_seller(&pool, seller.id).unwrap().is_empty());
}

// ══════════════════════════════════════════════════════════
//  photos column
// ══════════════════════════════════════════════════════════

#[test]
fn photos_round_trip_through_store() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    let mut req = make_create_req(seller.id, "Poster", 100);
    req.photos = vec![
        "content://media/42".to_string(),
        "https://cdn.mavs.edu/poster.jpg".to_string(),
    ];
    let created = listing_create(&pool, req).unwrap();

    let reloaded = &listing_list(&pool).unwrap()[0];
    assert_eq!(reloaded.photos, created.photos);
    assert_eq!(reloaded.photos.len(), 2);
}

#[test]
fn blank_photo_entries_dropped_on_create() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    let mut req = make_create_req(seller.id, "Mug", 100);
    req.photos = vec!["a.jpg".to_string(), "  ".to_string(), "b.jpg".to_string()];
    let created = listing_create(&pool, req).unwrap();
    assert_eq!(created.photos, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
}

#[test]
fn corrupted_photos_column_reads_as_empty() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    let mut req = make_create_req(seller.id, "Couch", 100);
    req.photos = vec!["couch.jpg".to_string()];
    let l = listing_create(&pool, req).unwrap();

    // corrupt the stored column behind the repository's back
    pool.0
        .lock()
        .unwrap()
        .execute(
            "UPDATE listings SET photos_json = 'not json at all' WHERE id = ?1",
            [l.id],
        )
        .unwrap();

    let reloaded = &listing_list(&pool).unwrap()[0];
    assert!(reloaded.photos.is_empty());
    assert_eq!(reloaded.title, "Couch");
}

// ══════════════════════════════════════════════════════════
//  cascade delete
// ══════════════════════════════════════════════════════════

#[test]
fn deleting_seller_cascades_to_listings() {
    let pool = init_test_db();
    let seller = seed_seller(&pool, "s@mavs.edu");
    let keeper = seed_seller(&pool, "keeper@mavs.edu");
    listing_create(&pool, make_create_req(seller.id, "Bike", 100)).unwrap();
    listing_create(&pool, make_create_req(seller.id, "Helmet", 200)).unwrap();
    let kept = listing_create(&pool, make_create_req(keeper.id, "Lamp", 150)).unwrap();

    assert_eq!(account_delete(&pool, seller.id).unwrap(), 1);

    let remaining = listing_list(&pool).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    assert!(listing_list_for_seller(&pool, seller.id).unwrap().is_empty());
}
