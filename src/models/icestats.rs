//the response of Icecast's `status-json.xsl`
//
//Only `icestats.source[].listeners` is actually read. Unread fields are kept as raw `Value`s and the
// `source` entries are typed lazily, so that an unexpected field or a broken entry elsewhere in the
// document doesn't fail the whole parse.

use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::{Map, Value};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusJson {
    pub icestats: Option<IceStats>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceStats {
    pub admin: Option<Value>,
    pub host: Option<Value>,
    pub location: Option<Value>,
    pub server_id: Option<Value>,
    pub server_start_iso8601: Option<Value>,
    pub source: Option<Sources>,
}

//Icecast emits a bare object instead of a one-element array when only one mount is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sources {
    List(Vec<Value>),
    Single(Map<String, Value>),
}

impl Sources {
    pub fn len(&self) -> usize {
        match self {
            Sources::List(l) => l.len(),
            Sources::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    //`None` when `index` is out of range, `Some(Err(_))` when the entry is not an object
    pub fn get(&self, index: usize) -> Option<Result<Source, serde_json::Error>> {
        match self {
            Sources::List(l) => l.get(index).map(|v| serde_json::from_value(v.clone())),
            Sources::Single(m) => {
                if (index == 0) {
                    Some(serde_json::from_value(Value::Object(m.clone())))
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub listeners: Option<Value>, //number-like; some relays report it as a string
    pub listener_peak: Option<Value>,
    pub listenurl: Option<Value>,
    pub server_name: Option<Value>,
    pub server_description: Option<Value>,
    pub genre: Option<Value>,
    pub stream_start_iso8601: Option<Value>,
}
