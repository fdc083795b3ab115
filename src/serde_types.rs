//! Subscription document schema.
//!
//! The schema is only a validation gate: documents are parsed to make sure
//! they are well-formed and the parsed value is thrown away.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct WsHeaders {
    #[serde(default, rename = "Host")]
    pub host: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Proxy {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub port: i64,
    #[serde(default, rename = "type")]
    pub protocol: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default, rename = "alterId")]
    pub alter_id: i64,
    #[serde(default)]
    pub cipher: String,
    #[serde(default)]
    pub tls: bool,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub ws_path: String,
    #[serde(default)]
    pub ws_headers: WsHeaders,
    #[serde(default)]
    pub udp: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ProxyGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub proxies: Vec<String>,
}

/// `proxy-groups` is either a single group mapping or a list of groups.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ProxyGroups {
    Many(Vec<ProxyGroup>),
    One(ProxyGroup),
}

impl Default for ProxyGroups {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl ProxyGroups {
    pub fn as_slice(&self) -> &[ProxyGroup] {
        match self {
            Self::One(group) => std::slice::from_ref(group),
            Self::Many(groups) => groups,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SubscriptionDocument {
    #[serde(default)]
    pub proxies: Vec<Proxy>,
    #[serde(default, rename = "proxy-groups")]
    pub proxy_groups: ProxyGroups,
    #[serde(default)]
    pub rules: Vec<String>,
}

impl SubscriptionDocument {
    /// Check that `data` is a well-formed subscription document.
    pub fn validate(data: &[u8]) -> Result<(), serde_yaml::Error> {
        serde_yaml::from_slice::<SubscriptionDocument>(data).map(|_| ())
    }
}
