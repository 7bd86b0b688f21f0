use serde::{Deserialize, Serialize};

/// A customer entry as stored and as rendered on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer<K> {
    pub id: K,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

/// Create/replace payload.
///
/// `id` is optional: a sequential store reads it on create, a UUID store
/// ignores it, and replace never uses it. Missing fields bind to their
/// zero value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerInput<K> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<K>,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

impl<K> Default for CustomerInput<K> {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            role: String::new(),
            email: String::new(),
            phone: String::new(),
            contacted: false,
        }
    }
}

impl<K> CustomerInput<K> {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        contacted: bool,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            role: role.into(),
            email: email.into(),
            phone: phone.into(),
            contacted,
        }
    }

    pub fn with_id(mut self, id: K) -> Self {
        self.id = Some(id);
        self
    }

    /// Build the stored record under `id`, discarding any id the payload carried.
    pub fn into_customer(self, id: K) -> Customer<K> {
        Customer {
            id,
            name: self.name,
            role: self.role,
            email: self.email,
            phone: self.phone,
            contacted: self.contacted,
        }
    }
}

impl<K> Customer<K> {
    /// Overwrite every field but `id`.
    pub fn overwrite_with(&mut self, input: CustomerInput<K>) {
        self.name = input.name;
        self.role = input.role;
        self.email = input.email;
        self.phone = input.phone;
        self.contacted = input.contacted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn integer_id_serializes_as_number() {
        let c = CustomerInput::new("Andrea", "Software Engineer", "andrea@company.com", "+3466578875", false)
            .into_customer(1i64);
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 1,
                "name": "Andrea",
                "role": "Software Engineer",
                "email": "andrea@company.com",
                "phone": "+3466578875",
                "contacted": false
            })
        );
    }

    #[test]
    fn uuid_id_serializes_as_hyphenated_string() {
        let id = Uuid::new_v4();
        let c = CustomerInput::new("Adrian", "Manager", "adrian@hello.com", "+39993899487", true).into_customer(id);
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["id"], json!(id.hyphenated().to_string()));
        assert_eq!(v["contacted"], json!(true));
    }

    #[test]
    fn input_binds_missing_fields_to_zero_values() {
        let input: CustomerInput<i64> = serde_json::from_value(json!({"name": "New"})).unwrap();
        assert_eq!(input.id, None);
        assert_eq!(input.name, "New");
        assert_eq!(input.role, "");
        assert!(!input.contacted);

        let input: CustomerInput<i64> = serde_json::from_value(json!({"id": 9, "contacted": true})).unwrap();
        assert_eq!(input.id, Some(9));
        assert!(input.contacted);
    }

    #[test]
    fn input_rejects_wrong_id_type() {
        let r: Result<CustomerInput<Uuid>, _> = serde_json::from_value(json!({"id": 3}));
        assert!(r.is_err());
    }

    #[test]
    fn overwrite_keeps_id() {
        let mut c = CustomerInput::new("Loren", "SEO Specialist", "lorean@seo.com", "+34773879833", false)
            .into_customer(3i64);
        c.overwrite_with(CustomerInput::new("Lauren", "SEO Lead", "lauren@seo.com", "+1", true).with_id(99));
        assert_eq!(c.id, 3);
        assert_eq!(c.name, "Lauren");
        assert_eq!(c.role, "SEO Lead");
        assert_eq!(c.email, "lauren@seo.com");
        assert_eq!(c.phone, "+1");
        assert!(c.contacted);
    }
}
