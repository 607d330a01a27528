use crate::{Error, Result};
use axum::body::Bytes;
use axum::extract::Multipart;
use std::fmt;

/// The three request shapes the gateway accepts. Each maps to one inbound
/// route and one upstream prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayKind {
    Classify,
    Defend,
    Visualize,
}

impl GatewayKind {
    /// Path appended to the upstream base URL when forwarding. The attack
    /// visualization endpoint is named after the PGD attack it runs.
    pub fn path_suffix(&self) -> &'static str {
        match self {
            Self::Classify => "/predict/classify",
            Self::Defend => "/predict/defend",
            Self::Visualize => "/predict/pgd",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classify => "classify",
            Self::Defend => "defend",
            Self::Visualize => "visualize",
        }
    }
}

impl fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated inbound request, carrying exactly the fields that get
/// forwarded upstream (or fed to the simulator).
#[derive(Debug, Clone)]
pub enum InferenceRequest {
    Classify {
        file_name: String,
        content_type: Option<String>,
        data: Bytes,
    },
    Defend {
        defense: String,
        /// Kept as the raw string: `"false"` is a present, valid value and
        /// must not be collapsed by a truthiness check.
        active: String,
    },
    Visualize {
        epsilon: f64,
        /// Original field text, forwarded unmodified.
        raw: String,
    },
}

impl InferenceRequest {
    pub fn kind(&self) -> GatewayKind {
        match self {
            Self::Classify { .. } => GatewayKind::Classify,
            Self::Defend { .. } => GatewayKind::Defend,
            Self::Visualize { .. } => GatewayKind::Visualize,
        }
    }

    /// Walks the multipart stream and checks the preconditions for the
    /// requested kind. Unknown fields are ignored rather than rejected, so
    /// clients may send extra form data without breaking.
    pub async fn from_multipart(kind: GatewayKind, mut multipart: Multipart) -> Result<Self> {
        match kind {
            GatewayKind::Classify => {
                let mut file = None;
                while let Some(field) = multipart.next_field().await? {
                    if field.name() == Some("file") {
                        let file_name = field.file_name().unwrap_or("upload").to_string();
                        let content_type = field.content_type().map(str::to_string);
                        let data = field.bytes().await?;
                        file = Some((file_name, content_type, data));
                    }
                }
                match file {
                    Some((file_name, content_type, data)) if !data.is_empty() => {
                        Ok(Self::Classify {
                            file_name,
                            content_type,
                            data,
                        })
                    }
                    _ => Err(Error::missing_input("file")),
                }
            }
            GatewayKind::Defend => {
                let mut defense = None;
                let mut active = None;
                while let Some(field) = multipart.next_field().await? {
                    let name = field.name().map(str::to_string);
                    match name.as_deref() {
                        Some("defense") => defense = Some(field.text().await?),
                        Some("active") => active = Some(field.text().await?),
                        _ => {}
                    }
                }
                // An empty defense name counts as missing; an empty or
                // literal-"false" active value is still present.
                let mut missing = Vec::new();
                if defense.as_deref().is_none_or(str::is_empty) {
                    missing.push("defense");
                }
                if active.is_none() {
                    missing.push("active");
                }
                match (defense, active) {
                    (Some(defense), Some(active)) if missing.is_empty() => {
                        Ok(Self::Defend { defense, active })
                    }
                    _ => Err(Error::missing_input(missing.join(", "))),
                }
            }
            GatewayKind::Visualize => {
                let mut epsilon = None;
                while let Some(field) = multipart.next_field().await? {
                    if field.name() == Some("epsilon") {
                        epsilon = Some(field.text().await?);
                    }
                }
                let raw = epsilon
                    .filter(|value| !value.is_empty())
                    .ok_or_else(|| Error::missing_input("epsilon"))?;
                let parsed = raw
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| Error::missing_input("epsilon"))?;
                Ok(Self::Visualize {
                    epsilon: parsed,
                    raw,
                })
            }
        }
    }

    /// Rebuilds the outbound multipart form with the fields exactly as they
    /// arrived.
    pub fn to_multipart_form(&self) -> reqwest::multipart::Form {
        use reqwest::multipart::{Form, Part};

        match self {
            Self::Classify {
                file_name,
                content_type,
                data,
            } => {
                let part = || Part::bytes(data.to_vec()).file_name(file_name.clone());
                let part = match content_type {
                    Some(mime) => part().mime_str(mime).unwrap_or_else(|_| part()),
                    None => part(),
                };
                Form::new().part("file", part)
            }
            Self::Defend { defense, active } => Form::new()
                .text("defense", defense.clone())
                .text("active", active.clone()),
            Self::Visualize { raw, .. } => Form::new().text("epsilon", raw.clone()),
        }
    }
}
