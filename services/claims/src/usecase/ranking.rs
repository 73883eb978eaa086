use futures::future::join_all;
use tracing::warn;
use uuid::Uuid;

use crate::domain::repository::{ClaimRepository, FoundItemRepository, SimilarityScorer};
use crate::domain::types::{ClaimScore, RankingReport, ScoredClaim};
use crate::error::ClaimsServiceError;

// ── RankClaims ───────────────────────────────────────────────────────────────

pub struct RankClaimsUseCase<I, C, S>
where
    I: FoundItemRepository,
    C: ClaimRepository,
    S: SimilarityScorer,
{
    pub items: I,
    pub claims: C,
    pub scorer: S,
}

impl<I, C, S> RankClaimsUseCase<I, C, S>
where
    I: FoundItemRepository,
    C: ClaimRepository,
    S: SimilarityScorer,
{
    /// Score every claim's description against the item's and rank best first.
    ///
    /// Claims the scorer fails on are left out; `total_claims` still counts them.
    pub async fn execute(
        &self,
        found_item_id: Uuid,
        requester_id: Uuid,
    ) -> Result<RankingReport, ClaimsServiceError> {
        let item = self
            .items
            .find_by_id(found_item_id)
            .await?
            .ok_or(ClaimsServiceError::FoundItemNotFound)?;
        if !item.is_reported_by(requester_id) {
            return Err(ClaimsServiceError::NotItemReporter);
        }

        self.scorer.connect().await.map_err(|e| {
            warn!(error = %e, "similarity scorer unreachable");
            ClaimsServiceError::ScorerUnavailable
        })?;

        let claims = self.claims.list_by_found_item(found_item_id).await?;
        let total_claims = claims.len();

        let source = item.description.as_str();
        let scores = join_all(claims.iter().map(|claim| async move {
            match self.scorer.score(source, &claim.description).await {
                Ok(score) => ClaimScore::Scored(score),
                Err(e) => {
                    warn!(claim_id = %claim.id, error = %e, "failed to score claim");
                    ClaimScore::Failed
                }
            }
        }))
        .await;

        let mut ranked = claims
            .into_iter()
            .zip(scores)
            .filter_map(|(claim, score)| match score {
                ClaimScore::Scored(score) => Some(ScoredClaim { claim, score }),
                ClaimScore::Failed => None,
            })
            .collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(RankingReport {
            found_item_id,
            total_claims,
            scored_claims: ranked.len(),
            ranked,
        })
    }
}
