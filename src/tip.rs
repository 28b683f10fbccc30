//! Tips to support agents and the ticket comment recording them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lnurl::{LightningAddress, LnurlError};

/// Amounts in sats offered to the user
pub const TIP_AMOUNTS: [u64; 3] = [100, 1_000, 10_000];

const ADDRESS_FIELDS: [&str; 2] = ["lightning_address", "lightningaddress"];

#[derive(thiserror::Error, Debug)]
pub enum TipError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("No Lightning Address found for the agent")]
    NoLightningAddress,

    #[error(transparent)]
    Lnurl(#[from] LnurlError),

    #[error("No tip amount selected")]
    NoTipAmount,

    #[error("The ticket must be assigned to an agent")]
    NoAssignee,
}

#[derive(Debug, Deserialize)]
struct Photo {
    content_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct User {
    id: u64,
    #[serde(default)]
    name: String,
    photo: Option<Photo>,
    #[serde(default)]
    user_fields: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserDocument {
    Wrapped { user: User },
    Bare(User),
}

/// The agent assigned to a ticket, as found in the ticket platform user document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    pub id: u64,
    pub name: String,
    pub avatar: String,
    pub lightning_address: Option<String>,
}

impl Assignee {
    /// Parse either `{"user": {...}}` or the bare user object
    pub fn from_user_json(json: &str) -> Result<Self, TipError> {
        let user = match serde_json::from_str(json)? {
            UserDocument::Wrapped { user } => user,
            UserDocument::Bare(user) => user,
        };
        let lightning_address = ADDRESS_FIELDS
            .iter()
            .filter_map(|f| user.user_fields.get(*f).and_then(Value::as_str))
            .map(str::trim)
            .find(|a| !a.is_empty())
            .map(ToString::to_string);

        Ok(Assignee {
            id: user.id,
            name: user.name,
            avatar: user
                .photo
                .and_then(|p| p.content_url)
                .unwrap_or_default(),
            lightning_address,
        })
    }

    pub fn lightning_address(&self) -> Result<LightningAddress, TipError> {
        let address = self
            .lightning_address
            .as_deref()
            .ok_or(TipError::NoLightningAddress)?;
        Ok(address.parse()?)
    }
}

/// A tip the user marked as paid, to be recorded as a comment on the ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipComment {
    pub amount_sats: u64,
    pub agent_name: String,
    pub message: Option<String>,
    pub lightning_address: LightningAddress,
    pub public: bool,
}

#[derive(Serialize)]
struct Comment<'a> {
    body: &'a str,
    public: bool,
}

#[derive(Serialize)]
struct Ticket<'a> {
    comment: Comment<'a>,
}

#[derive(Serialize)]
struct TicketUpdate<'a> {
    ticket: Ticket<'a>,
}

impl TipComment {
    /// Comments are public unless private comments are configured
    pub fn new(
        amount_sats: u64,
        agent_name: &str,
        message: Option<String>,
        lightning_address: &str,
        private_comments: bool,
    ) -> Result<Self, TipError> {
        if amount_sats == 0 {
            return Err(TipError::NoTipAmount);
        }
        if agent_name.trim().is_empty() {
            return Err(TipError::NoAssignee);
        }
        Ok(TipComment {
            amount_sats,
            agent_name: agent_name.to_string(),
            message: message.filter(|m| !m.trim().is_empty()),
            lightning_address: lightning_address.parse()?,
            public: !private_comments,
        })
    }

    pub fn body(&self) -> String {
        format!(
            "Tip: {} sats\nAgent: {}\nMessage: {}\nLightning Address: {}",
            self.amount_sats,
            self.agent_name,
            self.message.as_deref().unwrap_or("(none)"),
            self.lightning_address,
        )
    }

    /// The json payload updating the ticket with this comment
    pub fn ticket_update_json(&self) -> Result<String, TipError> {
        let body = self.body();
        let update = TicketUpdate {
            ticket: Ticket {
                comment: Comment {
                    body: &body,
                    public: self.public,
                },
            },
        };
        Ok(serde_json::to_string(&update)?)
    }
}
