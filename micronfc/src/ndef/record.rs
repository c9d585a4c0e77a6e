// micronfc/src/ndef/record.rs

use std::fmt;

use crate::types::RecordType;
use crate::utils::bytes_to_hex;

/// A fully resolved NDEF record. Smart posters own their children; once a
/// message has been read the tree holds no placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NdefRecord {
    Uri {
        uri: String,
    },
    Text {
        text: String,
        language_code: String,
    },
    SmartPoster {
        children: Vec<NdefRecord>,
    },
    Mime {
        mime_type: String,
        data: Vec<u8>,
    },
}

impl NdefRecord {
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri { uri: uri.into() }
    }

    pub fn text(text: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            language_code: language_code.into(),
        }
    }

    pub fn smart_poster(children: Vec<NdefRecord>) -> Self {
        Self::SmartPoster { children }
    }

    pub fn mime(mime_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Mime {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Uri { .. } => RecordType::Uri,
            Self::Text { .. } => RecordType::Text,
            Self::SmartPoster { .. } => RecordType::SmartPoster,
            Self::Mime { .. } => RecordType::Mime,
        }
    }

    /// Children of a smart poster; empty for every other record type.
    pub fn children(&self) -> &[NdefRecord] {
        match self {
            Self::SmartPoster { children } => children.as_slice(),
            _ => &[],
        }
    }
}

impl fmt::Display for NdefRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri { uri } => write!(f, "URI: {}", uri),
            Self::Text {
                text,
                language_code,
            } => write!(f, "Text [{}]: {}", language_code, text),
            Self::SmartPoster { children } => {
                write!(f, "Smart Poster [")?;
                for (i, child) in children.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            }
            Self::Mime { mime_type, data } => {
                write!(f, "MIME {} ({} bytes): {}", mime_type, data.len(), bytes_to_hex(data))
            }
        }
    }
}
