//! Recipient lists

use serde::{Deserialize, Serialize};

/// Separator placed between addresses of one recipient list
pub const ADDRESS_SEPARATOR: &str = ", ";

/// Direct, carbon-copy and blind-carbon-copy recipients of a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipients {
    #[serde(default)]
    pub to: Option<Vec<String>>,
    #[serde(default)]
    pub cc: Option<Vec<String>>,
    #[serde(default)]
    pub bcc: Option<Vec<String>>,
}

impl Recipients {
    /// Recipients with the given direct addresses and no copies
    pub fn to<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            to: Some(addresses.into_iter().map(Into::into).collect()),
            cc: None,
            bcc: None,
        }
    }

    pub fn with_cc<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cc = Some(addresses.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_bcc<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bcc = Some(addresses.into_iter().map(Into::into).collect());
        self
    }
}

/// Format one recipient list for the outgoing message.
///
/// An absent or empty list yields `None` so the field can be left out
/// entirely. A single address is used as is; several are joined with
/// [`ADDRESS_SEPARATOR`] in input order.
pub fn format_recipients(list: Option<&[String]>) -> Option<String> {
    match list {
        None | Some([]) => None,
        Some([single]) => Some(single.clone()),
        Some(addresses) => Some(addresses.join(ADDRESS_SEPARATOR)),
    }
}
