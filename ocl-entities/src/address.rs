#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street  : Option<String>,
    pub zip     : Option<String>,
    pub city    : Option<String>,
    pub country : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none() && self.zip.is_none() && self.city.is_none() && self.country.is_none()
    }

    /// All present parts joined into a single line, e.g. for
    /// handing the address to a geocoder.
    pub fn single_line(&self) -> String {
        [&self.street, &self.zip, &self.city, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        assert!(!Address {
            city: Some("Stuttgart".into()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn address_as_single_line() {
        let addr = Address {
            street: Some("Königstraße 1".into()),
            zip: Some("70173".into()),
            city: Some("Stuttgart".into()),
            country: None,
        };
        assert_eq!(addr.single_line(), "Königstraße 1, 70173, Stuttgart");
        assert_eq!(Address::default().single_line(), "");
    }
}
