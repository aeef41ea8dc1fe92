//! Penalty service
//!
//! Discipline rules name a points deduction (taken from the member's wallet,
//! floored at zero) and a score deduction (counted against the club's
//! activity score). Issuing a penalty records both.

use crate::database::DatabaseService;
use crate::models::pagination::{Page, PageParams};
use crate::models::penalty::{PenaltyRule, PenaltyRecord, CreatePenaltyRuleRequest, UpdatePenaltyRuleRequest, IssuePenaltyRequest};
use crate::models::wallet::TransactionKind;
use crate::utils::errors::{ClubHubError, Result};

#[derive(Clone)]
pub struct PenaltyService {
    db: DatabaseService,
}

impl PenaltyService {
    /// Create a new PenaltyService instance
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Create a discipline rule
    pub async fn create_rule(&self, request: CreatePenaltyRuleRequest) -> Result<PenaltyRule> {
        if request.name.trim().is_empty() {
            return Err(ClubHubError::InvalidInput("Rule name is required".to_string()));
        }

        if request.points_deduction < 0 || request.score_deduction < 0 {
            return Err(ClubHubError::InvalidInput(
                "Deductions cannot be negative".to_string()
            ));
        }

        self.db.penalties.create_rule(request).await
    }

    /// Fetch one rule
    pub async fn get_rule(&self, rule_id: i64) -> Result<PenaltyRule> {
        self.db.penalties.find_rule(rule_id).await?
            .ok_or(ClubHubError::RuleNotFound { rule_id })
    }

    /// Update a rule
    pub async fn update_rule(&self, rule_id: i64, request: UpdatePenaltyRuleRequest) -> Result<PenaltyRule> {
        self.get_rule(rule_id).await?;

        if request.points_deduction.map(|p| p < 0).unwrap_or(false)
            || request.score_deduction.map(|s| s < 0).unwrap_or(false)
        {
            return Err(ClubHubError::InvalidInput(
                "Deductions cannot be negative".to_string()
            ));
        }

        self.db.penalties.update_rule(rule_id, request).await
    }

    /// Delete a rule; refuses while records still cite it
    pub async fn delete_rule(&self, rule_id: i64) -> Result<()> {
        self.get_rule(rule_id).await?;

        let records = self.db.penalties.count_records_for_rule(rule_id).await?;
        if records > 0 {
            return Err(ClubHubError::InvalidInput(
                format!("{} penalty records still reference this rule", records)
            ));
        }

        self.db.penalties.delete_rule(rule_id).await
    }

    /// List rules
    pub async fn list_rules(&self, params: PageParams) -> Result<Page<PenaltyRule>> {
        let items = self.db.penalties.list_rules(params.limit(), params.offset()).await?;
        let total = self.db.penalties.count_rules().await?;

        Ok(Page::new(items, total, params))
    }

    /// Issue a penalty to a member under an active rule
    pub async fn issue(&self, request: IssuePenaltyRequest) -> Result<PenaltyRecord> {
        let rule = self.get_rule(request.rule_id).await?;

        if !rule.is_active {
            return Err(ClubHubError::InvalidInput(
                format!("Rule {} is no longer active", rule.name)
            ));
        }

        let user_id = request.user_id;
        if self.db.users.find_by_id(user_id).await?.is_none() {
            return Err(ClubHubError::UserNotFound { user_id });
        }

        if let Some(club_id) = request.club_id {
            if self.db.clubs.find_by_id(club_id).await?.is_none() {
                return Err(ClubHubError::ClubNotFound { club_id });
            }
        }

        let record = self.db.penalties.create_record(request).await?;

        if rule.points_deduction > 0 {
            let reference = format!("penalty:{}", record.id);
            self.db.wallets
                .debit_saturating(user_id, rule.points_deduction, TransactionKind::Penalty, Some(&reference))
                .await?;
        }

        crate::utils::logging::log_penalty_issued(rule.id, user_id, record.issued_by);
        Ok(record)
    }

    /// Penalties issued to a member, newest first
    pub async fn records_for_user(&self, user_id: i64, params: PageParams) -> Result<Vec<PenaltyRecord>> {
        if self.db.users.find_by_id(user_id).await?.is_none() {
            return Err(ClubHubError::UserNotFound { user_id });
        }

        self.db.penalties.records_for_user(user_id, params.limit(), params.offset()).await
    }

    /// Penalties recorded against a club, newest first
    pub async fn records_for_club(&self, club_id: i64, params: PageParams) -> Result<Vec<PenaltyRecord>> {
        if self.db.clubs.find_by_id(club_id).await?.is_none() {
            return Err(ClubHubError::ClubNotFound { club_id });
        }

        self.db.penalties.records_for_club(club_id, params.limit(), params.offset()).await
    }
}
