use anyhow::anyhow;
use serde_json::{Map, Value};
use std::convert::TryFrom;

use crate::dispatcher::HandlerRequest;
use crate::typed::{Handler, TypedHandlerRequest};

#[derive(Debug, Clone)]
pub struct QueryPersonRequest {
    pub name: Option<String>,
    pub age: i64,
}

impl TryFrom<HandlerRequest> for QueryPersonRequest {
    type Error = anyhow::Error;

    fn try_from(req: HandlerRequest) -> Result<Self, Self::Error> {
        let name = req.get_query_param("name").map(str::to_string);
        let age = req
            .get_query_param("age")
            .ok_or_else(|| anyhow!("missing age"))?
            .parse()?;
        Ok(QueryPersonRequest { name, age })
    }
}

pub struct QueryPersonController;

impl Handler for QueryPersonController {
    type Request = QueryPersonRequest;
    type Response = Value;

    /// Single-entry mapping from the queried name to the age. An absent
    /// name maps from the key `"null"`.
    fn handle(&self, req: TypedHandlerRequest<QueryPersonRequest>) -> Value {
        let key = req.data.name.unwrap_or_else(|| "null".to_string());
        let mut out = Map::new();
        out.insert(key, Value::from(req.data.age));
        Value::Object(out)
    }
}
