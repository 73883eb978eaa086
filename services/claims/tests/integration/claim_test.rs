use bytes::Bytes;
use uuid::Uuid;

use lostfound_claims::domain::repository::ClaimRepository;
use lostfound_claims::domain::types::{Actor, Claim, ProofImage};
use lostfound_claims::error::ClaimsServiceError;
use lostfound_claims::usecase::claim::{
    CreateClaimInput, CreateClaimUseCase, ListClaimsForItemUseCase, ListMyClaimsUseCase,
};
use lostfound_domain::status::{ClaimStatus, ItemStatus, NotificationKind};

use crate::helpers::{
    MockImageStore, MockStore, RecordingDispatcher, actor, pending_claim, pending_item,
};

struct Harness {
    store: MockStore,
    images: MockImageStore,
    dispatcher: RecordingDispatcher,
}

impl Harness {
    fn new(store: MockStore) -> Self {
        Self {
            store,
            images: MockImageStore::default(),
            dispatcher: RecordingDispatcher::default(),
        }
    }

    async fn claim(
        &self,
        found_item_id: Uuid,
        claimant: &Actor,
        input: CreateClaimInput,
    ) -> Result<Claim, ClaimsServiceError> {
        CreateClaimUseCase {
            items: self.store.clone(),
            claims: self.store.clone(),
            images: self.images.clone(),
            notifications: self.dispatcher.clone(),
        }
        .execute(found_item_id, claimant, input)
        .await
    }
}

fn input(description: &str) -> CreateClaimInput {
    CreateClaimInput {
        description: description.to_owned(),
        additional_info: None,
        proof_image: None,
    }
}

fn png() -> ProofImage {
    ProofImage {
        content_type: "image/png".to_owned(),
        bytes: Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
    }
}

#[tokio::test]
async fn should_create_pending_claim_and_notify_reporter() {
    let reporter = actor("Riley Reporter");
    let claimant = actor("Casey Claimant");
    let item = pending_item(&reporter, "Blue umbrella", 10);
    let h = Harness::new(MockStore::with(vec![item.clone()], vec![]));

    let claim = h
        .claim(
            item.id,
            &claimant,
            CreateClaimInput {
                description: " Blue with a wooden handle ".to_owned(),
                additional_info: Some("  ".to_owned()),
                proof_image: Some(png()),
            },
        )
        .await
        .unwrap();

    assert_eq!(claim.status, ClaimStatus::Pending);
    assert_eq!(claim.description, "Blue with a wooden handle");
    assert_eq!(claim.claimant_id, claimant.id);
    assert_eq!(claim.reporter_id, reporter.id);
    assert_eq!(claim.claimant_name, "Casey Claimant");
    assert_eq!(claim.additional_info, None);
    assert_eq!(claim.proof_image_url.as_deref(), Some("/uploads/proof-1.png"));
    assert_eq!(h.store.claim(claim.id), claim);

    let sent = h.dispatcher.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient_id, reporter.id);
    assert_eq!(sent[0].kind, NotificationKind::ClaimReceived);
    assert_eq!(sent[0].claim_id, Some(claim.id));
    assert_eq!(
        sent[0].message,
        "Casey Claimant submitted a claim for \"Blue umbrella\"."
    );
}

#[tokio::test]
async fn should_reject_blank_description_before_storing_image() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Umbrella", 1);
    let h = Harness::new(MockStore::with(vec![item.clone()], vec![]));

    let mut blank = input("   ");
    blank.proof_image = Some(png());
    let err = h.claim(item.id, &actor("Casey"), blank).await.unwrap_err();

    assert!(matches!(err, ClaimsServiceError::InvalidField("description")));
    assert_eq!(h.images.count(), 0);
    assert!(h.dispatcher.sent().is_empty());
}

#[tokio::test]
async fn should_reject_non_image_proof() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Umbrella", 1);
    let h = Harness::new(MockStore::with(vec![item.clone()], vec![]));

    let mut with_pdf = input("Blue umbrella");
    with_pdf.proof_image = Some(ProofImage {
        content_type: "application/pdf".to_owned(),
        bytes: Bytes::from_static(b"%PDF-1.7"),
    });
    let err = h.claim(item.id, &actor("Casey"), with_pdf).await.unwrap_err();

    assert!(matches!(err, ClaimsServiceError::InvalidProofImage));
    assert_eq!(h.images.count(), 0);
}

#[tokio::test]
async fn should_refuse_claims_on_missing_or_resolved_items() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Umbrella", 1);
    let h = Harness::new(MockStore::with(vec![item.clone()], vec![]));

    let err = h
        .claim(Uuid::new_v4(), &actor("Casey"), input("Blue"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClaimsServiceError::FoundItemNotFound));

    h.store.set_item_status(item.id, ItemStatus::Resolved);
    let err = h
        .claim(item.id, &actor("Casey"), input("Blue"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClaimsServiceError::ItemNotPending));
}

#[tokio::test]
async fn should_not_let_reporter_claim_own_item() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Umbrella", 1);
    let h = Harness::new(MockStore::with(vec![item.clone()], vec![]));

    let err = h.claim(item.id, &reporter, input("Mine")).await.unwrap_err();

    assert!(matches!(err, ClaimsServiceError::CannotClaimOwnItem));
}

#[tokio::test]
async fn should_allow_one_claim_per_claimant_per_item() {
    let reporter = actor("Riley");
    let claimant = actor("Casey");
    let item = pending_item(&reporter, "Umbrella", 1);
    let h = Harness::new(MockStore::with(vec![item.clone()], vec![]));

    h.claim(item.id, &claimant, input("Blue")).await.unwrap();
    let err = h
        .claim(item.id, &claimant, input("Blue, again"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClaimsServiceError::DuplicateClaim));
    assert_eq!(h.store.claims.lock().unwrap().len(), 1);
    assert_eq!(h.dispatcher.sent().len(), 1);
}

/// Existence check that always misses, as when a concurrent request inserts
/// between the check and the write.
#[derive(Clone)]
struct StaleExistenceCheck(MockStore);

impl ClaimRepository for StaleExistenceCheck {
    async fn create(&self, claim: &Claim) -> Result<(), ClaimsServiceError> {
        ClaimRepository::create(&self.0, claim).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Claim>, ClaimsServiceError> {
        ClaimRepository::find_by_id(&self.0, id).await
    }

    async fn list_by_found_item(
        &self,
        found_item_id: Uuid,
    ) -> Result<Vec<Claim>, ClaimsServiceError> {
        self.0.list_by_found_item(found_item_id).await
    }

    async fn list_by_claimant(&self, claimant_id: Uuid) -> Result<Vec<Claim>, ClaimsServiceError> {
        self.0.list_by_claimant(claimant_id).await
    }

    async fn exists_for(&self, _: Uuid, _: Uuid) -> Result<bool, ClaimsServiceError> {
        Ok(false)
    }

    async fn reject_pending(
        &self,
        id: Uuid,
        feedback: &str,
    ) -> Result<Option<Claim>, ClaimsServiceError> {
        self.0.reject_pending(id, feedback).await
    }
}

#[tokio::test]
async fn should_discard_proof_image_when_insert_loses_duplicate_race() {
    let reporter = actor("Riley");
    let claimant = actor("Casey");
    let item = pending_item(&reporter, "Umbrella", 1);
    let first = pending_claim(&item, &claimant, "Blue", 1);
    let store = MockStore::with(vec![item.clone()], vec![first]);
    let images = MockImageStore::default();
    let dispatcher = RecordingDispatcher::default();

    let mut with_image = input("Blue, with a photo");
    with_image.proof_image = Some(png());
    let err = CreateClaimUseCase {
        items: store.clone(),
        claims: StaleExistenceCheck(store.clone()),
        images: images.clone(),
        notifications: dispatcher.clone(),
    }
    .execute(item.id, &claimant, with_image)
    .await
    .unwrap_err();

    assert!(matches!(err, ClaimsServiceError::DuplicateClaim));
    assert_eq!(images.count(), 1);
    assert_eq!(images.discarded(), vec!["/uploads/proof-1.png".to_owned()]);
    assert_eq!(store.claims.lock().unwrap().len(), 1);
    assert!(dispatcher.sent().is_empty());
}

#[tokio::test]
async fn should_keep_proof_image_of_created_claim() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Umbrella", 1);
    let h = Harness::new(MockStore::with(vec![item.clone()], vec![]));

    let mut with_image = input("Blue");
    with_image.proof_image = Some(png());
    h.claim(item.id, &actor("Casey"), with_image).await.unwrap();

    assert_eq!(h.images.count(), 1);
    assert!(h.images.discarded().is_empty());
}

#[tokio::test]
async fn should_list_claims_for_item_only_to_reporter() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Umbrella", 60);
    let older = pending_claim(&item, &actor("A"), "first", 30);
    let newer = pending_claim(&item, &actor("B"), "second", 5);
    let store = MockStore::with(vec![item.clone()], vec![older.clone(), newer.clone()]);
    let usecase = ListClaimsForItemUseCase {
        items: store.clone(),
        claims: store.clone(),
    };

    let claims = usecase.execute(item.id, reporter.id).await.unwrap();
    assert_eq!(claims, vec![newer, older]);

    let err = usecase.execute(item.id, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ClaimsServiceError::NotItemReporter));

    let err = usecase
        .execute(Uuid::new_v4(), reporter.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ClaimsServiceError::FoundItemNotFound));
}

#[tokio::test]
async fn should_list_my_claims_newest_first() {
    let claimant = actor("Casey");
    let first = pending_item(&actor("Riley"), "Umbrella", 60);
    let second = pending_item(&actor("Sam"), "Scarf", 60);
    let old = pending_claim(&first, &claimant, "blue", 20);
    let recent = pending_claim(&second, &claimant, "red", 2);
    let someone_else = pending_claim(&first, &actor("Drew"), "green", 1);
    let store = MockStore::with(
        vec![first, second],
        vec![old.clone(), someone_else, recent.clone()],
    );

    let claims = ListMyClaimsUseCase { claims: store }
        .execute(claimant.id)
        .await
        .unwrap();

    assert_eq!(claims, vec![recent, old]);
}
