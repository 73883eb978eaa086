use uuid::Uuid;

use lostfound_claims::domain::types::RankingReport;
use lostfound_claims::error::ClaimsServiceError;
use lostfound_claims::usecase::ranking::RankClaimsUseCase;

use crate::helpers::{MockScorer, MockStore, actor, pending_claim, pending_item};

async fn rank(
    store: &MockStore,
    scorer: &MockScorer,
    found_item_id: Uuid,
    requester: Uuid,
) -> Result<RankingReport, ClaimsServiceError> {
    RankClaimsUseCase {
        items: store.clone(),
        claims: store.clone(),
        scorer: scorer.clone(),
    }
    .execute(found_item_id, requester)
    .await
}

#[tokio::test]
async fn should_skip_failed_claim_and_rank_the_rest_descending() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Black wallet", 60);
    let first = pending_claim(&item, &actor("A"), "brown wallet", 30);
    let second = pending_claim(&item, &actor("B"), "unscorable", 20);
    let third = pending_claim(&item, &actor("C"), "black wallet with a bus pass", 10);
    let store = MockStore::with(
        vec![item.clone()],
        vec![first.clone(), second, third.clone()],
    );
    let scorer = MockScorer::with_scores(&[
        ("brown wallet", 0.41),
        ("black wallet with a bus pass", 0.93),
    ]);

    let report = rank(&store, &scorer, item.id, reporter.id).await.unwrap();

    assert_eq!(report.found_item_id, item.id);
    assert_eq!(report.total_claims, 3);
    assert_eq!(report.scored_claims, 2);
    let ranked = report
        .ranked
        .iter()
        .map(|r| (r.claim.id, r.score))
        .collect::<Vec<_>>();
    assert_eq!(ranked, [(third.id, 0.93), (first.id, 0.41)]);
    assert_eq!(scorer.calls(), 3);
}

#[tokio::test]
async fn should_fail_fast_when_scorer_unreachable() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Black wallet", 60);
    let claim = pending_claim(&item, &actor("A"), "brown wallet", 30);
    let store = MockStore::with(vec![item.clone()], vec![claim]);
    let scorer = MockScorer::unreachable();

    let err = rank(&store, &scorer, item.id, reporter.id)
        .await
        .unwrap_err();

    assert!(matches!(err, ClaimsServiceError::ScorerUnavailable));
    assert_eq!(scorer.calls(), 0);
}

#[tokio::test]
async fn should_rank_only_for_reporter() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Black wallet", 60);
    let store = MockStore::with(vec![item.clone()], vec![]);
    let scorer = MockScorer::default();

    let err = rank(&store, &scorer, item.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ClaimsServiceError::NotItemReporter));

    let err = rank(&store, &scorer, Uuid::new_v4(), reporter.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ClaimsServiceError::FoundItemNotFound));
}

#[tokio::test]
async fn should_return_empty_ranking_without_claims() {
    let reporter = actor("Riley");
    let item = pending_item(&reporter, "Black wallet", 60);
    let store = MockStore::with(vec![item.clone()], vec![]);

    let report = rank(&store, &MockScorer::default(), item.id, reporter.id)
        .await
        .unwrap();

    assert_eq!(report.total_claims, 0);
    assert_eq!(report.scored_claims, 0);
    assert!(report.ranked.is_empty());
}
