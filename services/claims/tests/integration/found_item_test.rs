use lostfound_claims::domain::types::{Actor, FoundItem};
use lostfound_claims::error::ClaimsServiceError;
use lostfound_claims::usecase::found_item::{
    CreateFoundItemInput, CreateFoundItemUseCase, DeleteFoundItemUseCase, GetFoundItemUseCase,
    ListFoundItemsUseCase, ListMyFoundItemsUseCase,
};
use lostfound_domain::category::ItemCategory;
use lostfound_domain::status::ItemStatus;
use uuid::Uuid;

use crate::helpers::{MockStore, actor, pending_item};

fn input(title: &str, category: &str) -> CreateFoundItemInput {
    CreateFoundItemInput {
        title: title.to_owned(),
        description: "Black leather, two cards inside".to_owned(),
        category: category.to_owned(),
        found_date: "2024-03-09".to_owned(),
        found_location: "Cafeteria".to_owned(),
    }
}

async fn create(
    store: &MockStore,
    reporter: &Actor,
    input: CreateFoundItemInput,
) -> Result<FoundItem, ClaimsServiceError> {
    CreateFoundItemUseCase {
        items: store.clone(),
    }
    .execute(reporter, input)
    .await
}

#[tokio::test]
async fn should_create_pending_item_owned_by_reporter() {
    let store = MockStore::default();
    let reporter = actor("Riley Reporter");

    let item = create(&store, &reporter, input(" Wallet ", "Wallets"))
        .await
        .unwrap();

    assert_eq!(item.title, "Wallet");
    assert_eq!(item.category, ItemCategory::Wallets);
    assert_eq!(item.status, ItemStatus::Pending);
    assert_eq!(item.reporter_id, reporter.id);
    assert_eq!(item.reporter_name, "Riley Reporter");
    assert!(item.returned_to.is_none() && item.returned_date.is_none());
    assert_eq!(store.item(item.id), Some(item));
}

#[tokio::test]
async fn should_reject_missing_fields() {
    let store = MockStore::default();
    let reporter = actor("Riley Reporter");

    let err = create(&store, &reporter, input("  ", "keys")).await.unwrap_err();
    assert!(matches!(err, ClaimsServiceError::InvalidField("title")));

    let mut bad_date = input("Keys", "keys");
    bad_date.found_date = "last tuesday".to_owned();
    let err = create(&store, &reporter, bad_date).await.unwrap_err();
    assert!(matches!(err, ClaimsServiceError::InvalidField("found_date")));

    let err = create(&store, &reporter, input("Keys", "")).await.unwrap_err();
    assert!(matches!(err, ClaimsServiceError::InvalidField("category")));

    assert!(store.items.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_unknown_category_on_create() {
    let store = MockStore::default();
    let err = create(&store, &actor("Riley"), input("Hamster", "pets"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClaimsServiceError::UnknownCategory(v) if v == "pets"));
}

#[tokio::test]
async fn should_list_newest_first_with_category_filter() {
    let reporter = actor("Riley");
    let mut old_keys = pending_item(&reporter, "Old keys", 30);
    old_keys.category = ItemCategory::Keys;
    let mut new_keys = pending_item(&reporter, "New keys", 5);
    new_keys.category = ItemCategory::Keys;
    let umbrella = pending_item(&reporter, "Umbrella", 1);
    let store = MockStore::with(vec![old_keys.clone(), umbrella, new_keys.clone()], vec![]);
    let usecase = ListFoundItemsUseCase {
        items: store.clone(),
    };

    let all = usecase.execute(None).await.unwrap();
    let titles = all.iter().map(|i| i.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, ["Umbrella", "New keys", "Old keys"]);

    let keys = usecase.execute(Some(ItemCategory::Keys)).await.unwrap();
    let ids = keys.iter().map(|i| i.id).collect::<Vec<_>>();
    assert_eq!(ids, [new_keys.id, old_keys.id]);
}

#[tokio::test]
async fn should_list_only_my_items() {
    let me = actor("Riley");
    let other = actor("Sam");
    let mine = pending_item(&me, "Scarf", 3);
    let store = MockStore::with(vec![mine.clone(), pending_item(&other, "Phone", 1)], vec![]);

    let items = ListMyFoundItemsUseCase {
        items: store.clone(),
    }
    .execute(me.id)
    .await
    .unwrap();

    assert_eq!(items, vec![mine]);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_item() {
    let err = GetFoundItemUseCase {
        items: MockStore::default(),
    }
    .execute(Uuid::new_v4())
    .await
    .unwrap_err();
    assert!(matches!(err, ClaimsServiceError::FoundItemNotFound));
}

// ── Delete ───────────────────────────────────────────────────────────────────

async fn delete(store: &MockStore, id: Uuid, requester: Uuid) -> Result<(), ClaimsServiceError> {
    DeleteFoundItemUseCase {
        items: store.clone(),
    }
    .execute(id, requester)
    .await
}

#[tokio::test]
async fn should_delete_pending_item_for_reporter() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Bottle", 1);
    let store = MockStore::with(vec![item.clone()], vec![]);

    delete(&store, item.id, reporter.id).await.unwrap();

    assert!(store.item(item.id).is_none());
}

#[tokio::test]
async fn should_check_delete_preconditions_in_order() {
    let reporter = actor("Riley");
    let stranger = actor("Sam");
    let item = pending_item(&reporter, "Bottle", 1);
    let store = MockStore::with(vec![item.clone()], vec![]);

    let err = delete(&store, Uuid::new_v4(), reporter.id).await.unwrap_err();
    assert!(matches!(err, ClaimsServiceError::FoundItemNotFound));

    store.set_item_status(item.id, ItemStatus::Resolved);

    // A stranger learns nothing about the item's state.
    let err = delete(&store, item.id, stranger.id).await.unwrap_err();
    assert!(matches!(err, ClaimsServiceError::NotItemReporter));

    let err = delete(&store, item.id, reporter.id).await.unwrap_err();
    assert!(matches!(err, ClaimsServiceError::ItemNotPending));
    assert!(store.item(item.id).is_some());
}
