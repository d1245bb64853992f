//! Wire shapes of the card export, as returned by the `CardsQuery` GraphQL
//! query.
//!
//! Everything here is deliberately loose: nullable where the remote schema
//! allows it, and numeric fields accept either JSON numbers or numeric
//! strings because the GraphQL layer encodes `BigInt`/`BigFloat` as text.
//! [`crate::ingest`] turns these into typed cards.

use serde::Deserialize;

/// Top-level document, either bare (`{"cards": ...}`) or wrapped in the
/// GraphQL `data` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct RawExport {
    #[serde(default)]
    pub(crate) data: Option<RawCardsQuery>,
    #[serde(default)]
    pub(crate) cards: Option<RawConnection<RawCard>>,
}

impl RawExport {
    /// Return the cards connection, preferring the `data` envelope.
    pub(crate) fn into_cards(self) -> Option<RawConnection<RawCard>> {
        match self.data {
            Some(query) => query.cards,
            None => self.cards,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCardsQuery {
    #[serde(default)]
    pub(crate) cards: Option<RawConnection<RawCard>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawConnection<T> {
    #[serde(default = "Option::default")]
    pub(crate) edges: Option<Vec<RawEdge<T>>>,
}

impl<T> RawConnection<T> {
    pub(crate) fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().flatten().map(|edge| edge.node)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEdge<T> {
    pub(crate) node: T,
}

/// Card node. Identity fields are optional here so one incomplete card is
/// skipped during ingestion instead of failing the whole document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCard {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) slug: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) image_path: Option<String>,
    #[serde(default)]
    pub(crate) bonus_points: Option<RawConnection<RawBonusPoint>>,
    #[serde(default)]
    pub(crate) scores: Option<RawConnection<RawScore>>,
    #[serde(default)]
    pub(crate) issuer: Option<RawIssuer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawIssuer {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) slug: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBonusPoint {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) rewards_program: Option<String>,
    #[serde(default)]
    pub(crate) amount: Option<RawNumeric>,
    #[serde(default)]
    pub(crate) yearly_fee_cents: Option<RawNumeric>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawScore {
    #[serde(default)]
    pub(crate) rewards_program: Option<String>,
    #[serde(default)]
    pub(crate) score: Option<RawNumeric>,
}

/// A JSON number or a string holding one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawNumeric {
    Number(serde_json::Number),
    Text(String),
}

impl RawNumeric {
    /// Interpret the value as a non-negative integer.
    pub(crate) fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Number(number) => number.as_u64(),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Interpret the value as a finite float.
    pub(crate) fn to_finite_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(number) => number.as_f64(),
            Self::Text(text) => text.trim().parse().ok(),
        };
        value.filter(|parsed: &f64| parsed.is_finite())
    }
}

impl std::fmt::Display for RawNumeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}
