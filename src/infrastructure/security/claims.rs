// src/infrastructure/security/claims.rs
use crate::{
    application::{
        dto::TokenClaims,
        error::{ApplicationError, ApplicationResult},
    },
    domain::identifier::Identifier,
};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<TokenClaims> {
    ClaimsContext::from_facts(facts).into_claims()
}

#[derive(Default)]
struct ClaimsContext {
    account: Option<(String, String, String)>,
    role: Option<(String, String)>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = Self::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("account", [Term::Str(id), Term::Str(email), Term::Str(name)]) => {
                self.account = Some((id.clone(), email.clone(), name.clone()));
            }
            ("role", [Term::Str(id), Term::Str(name)]) => {
                self.role = Some((id.clone(), name.clone()));
            }
            ("issued_at", [Term::Date(seconds)]) => self.issued_at = Some(to_datetime(*seconds)),
            ("expires_at", [Term::Date(seconds)]) => self.expires_at = Some(to_datetime(*seconds)),
            _ => {}
        }
    }

    fn into_claims(self) -> ApplicationResult<TokenClaims> {
        let missing = |what: &str| ApplicationError::unauthorized(format!("token is missing {what}"));

        let (id, email, name) = self.account.ok_or_else(|| missing("account"))?;
        let account_id = Identifier::new(&id).map_err(|_| missing("a valid account id"))?;
        let (role_id, role_name) = match self.role {
            Some((id, name)) => (
                Some(Identifier::new(&id).map_err(|_| missing("a valid role id"))?),
                Some(name),
            ),
            None => (None, None),
        };

        Ok(TokenClaims {
            account_id,
            email,
            name,
            role_id,
            role_name,
            issued_at: self.issued_at.ok_or_else(|| missing("issued_at"))?,
            expires_at: self.expires_at.ok_or_else(|| missing("expires_at"))?,
        })
    }
}

fn to_datetime(seconds: u64) -> DateTime<Utc> {
    DateTime::<Utc>::from(UNIX_EPOCH + Duration::from_secs(seconds))
}
