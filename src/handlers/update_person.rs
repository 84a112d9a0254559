use anyhow::anyhow;
use serde_json::{Map, Value};
use std::convert::TryFrom;

use crate::dispatcher::HandlerRequest;
use crate::model::{Location, Person};
use crate::typed::{Handler, TypedHandlerRequest};

#[derive(Debug, Clone)]
pub struct UpdatePersonRequest {
    pub person_id: i64,
    pub person: Person,
    pub location: Location,
}

impl TryFrom<HandlerRequest> for UpdatePersonRequest {
    type Error = anyhow::Error;

    fn try_from(req: HandlerRequest) -> Result<Self, Self::Error> {
        let person_id = req
            .get_path_param("person_id")
            .ok_or_else(|| anyhow!("missing person_id"))?
            .parse()?;
        let body = req.body.ok_or_else(|| anyhow!("missing request body"))?;
        let person = body
            .get("person")
            .cloned()
            .ok_or_else(|| anyhow!("missing person record"))?;
        let location = body
            .get("location")
            .cloned()
            .ok_or_else(|| anyhow!("missing location record"))?;
        Ok(UpdatePersonRequest {
            person_id,
            person: serde_json::from_value(person)?,
            location: serde_json::from_value(location)?,
        })
    }
}

/// Overwrite-union of two flat records: `b`'s value survives any key
/// collision.
pub fn merge_records(a: Map<String, Value>, b: Map<String, Value>) -> Map<String, Value> {
    let mut merged = a;
    for (k, v) in b {
        merged.insert(k, v);
    }
    merged
}

fn record_fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

pub struct UpdatePersonController;

impl Handler for UpdatePersonController {
    type Request = UpdatePersonRequest;
    type Response = Value;

    /// Merge the person's and location's fields into one flat mapping,
    /// keyed by the decimal id. Merge order is person-then-location.
    fn handle(&self, req: TypedHandlerRequest<UpdatePersonRequest>) -> Value {
        let person = record_fields(serde_json::to_value(&req.data.person).unwrap_or_default());
        let location = record_fields(serde_json::to_value(&req.data.location).unwrap_or_default());
        let merged = merge_records(person, location);

        let mut out = Map::new();
        out.insert(req.data.person_id.to_string(), Value::Object(merged));
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_merge_disjoint_is_exact_union() {
        let a = obj(json!({"first_name": "A", "age": 5}));
        let b = obj(json!({"city": "Lima", "country": "Peru"}));
        let merged = merge_records(a, b);
        assert_eq!(
            Value::Object(merged),
            json!({"first_name": "A", "age": 5, "city": "Lima", "country": "Peru"})
        );
    }

    #[test]
    fn test_merge_collision_second_wins() {
        let a = obj(json!({"name": "from_person", "age": 5}));
        let b = obj(json!({"name": "from_location"}));
        let merged = merge_records(a, b);
        assert_eq!(merged.get("name"), Some(&json!("from_location")));
        assert_eq!(merged.get("age"), Some(&json!(5)));
    }
}
