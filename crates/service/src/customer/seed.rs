use super::{Customer, CustomerId, CustomerInput};

/// Sample records loaded into a fresh store at startup.
pub fn sample_customers<K: CustomerId>() -> Vec<Customer<K>> {
    [
        ("Andrea", "Software Engineer", "andrea@company.com", "+3466578875", false),
        ("Adrian", "Manager", "adrian@hello.com", "+39993899487", true),
        ("Loren", "SEO Specialist", "lorean@seo.com", "+34773879833", false),
        ("Elisa", "Marketing Manager", "elisa@marketing.com", "+41884788493", true),
        ("Roby", "UX Designer", "ruby@design.com", "+346169614595", true),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, role, email, phone, contacted))| {
        CustomerInput::new(name, role, email, phone, contacted).into_customer(K::seed_id(i))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn sequential_seed_uses_ids_one_to_five() {
        let seed = sample_customers::<i64>();
        let ids: Vec<i64> = seed.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(seed[0].name, "Andrea");
        assert_eq!(seed[1].name, "Adrian");
        assert!(seed[1].contacted);
    }

    #[test]
    fn uuid_seed_has_unique_ids() {
        let seed = sample_customers::<Uuid>();
        assert_eq!(seed.len(), 5);
        let unique: std::collections::HashSet<_> = seed.iter().map(|c| c.id).collect();
        assert_eq!(unique.len(), 5);
    }
}
