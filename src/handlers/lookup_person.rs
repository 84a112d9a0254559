use anyhow::anyhow;
use serde_json::{Map, Value};
use std::convert::TryFrom;

use crate::dispatcher::HandlerRequest;
use crate::typed::{Handler, TypedHandlerRequest};

#[derive(Debug, Clone)]
pub struct LookupPersonRequest {
    pub person_id: i64,
}

impl TryFrom<HandlerRequest> for LookupPersonRequest {
    type Error = anyhow::Error;

    fn try_from(req: HandlerRequest) -> Result<Self, Self::Error> {
        let person_id = req
            .get_path_param("person_id")
            .ok_or_else(|| anyhow!("missing person_id"))?
            .parse()?;
        Ok(LookupPersonRequest { person_id })
    }
}

pub struct LookupPersonController;

impl Handler for LookupPersonController {
    type Request = LookupPersonRequest;
    type Response = Value;

    /// Existence acknowledgment keyed by the decimal id.
    fn handle(&self, req: TypedHandlerRequest<LookupPersonRequest>) -> Value {
        let mut out = Map::new();
        out.insert(
            req.data.person_id.to_string(),
            Value::from("It's exists!"),
        );
        Value::Object(out)
    }
}
