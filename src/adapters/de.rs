use crate::domain::ports::AddressView;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

// A line counts as numeric with an optional sign, integer/decimal/exponent
// forms, and surrounding ASCII space.
static NUMERIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$")
        .expect("numeric line pattern is valid")
});

/// German-locale address decorator.
///
/// Wraps any [`AddressView`] and overrides `lines()` and `company()` with
/// DE-specific recombination: a purely numeric line1 signals a P.O.-box
/// style address, and any line mentioning "Packstation" is a parcel locker.
/// In both cases the street data stays in the line sequence instead of
/// being promoted to the company field. All other members forward to the
/// wrapped value unchanged.
///
/// Both overridden readers recompute from the wrapped value's current state
/// on every call and never mutate it.
pub struct DeAddressDecorator<A: AddressView> {
    inner: A,
    // Raw provider response the address was built from. Not consulted by
    // the current rules; kept as an input for future rule refinement.
    #[allow(dead_code)]
    response_data: Map<String, Value>,
}

impl<A: AddressView> DeAddressDecorator<A> {
    pub fn new(inner: A, response_data: Map<String, Value>) -> Self {
        Self {
            inner,
            response_data,
        }
    }

    fn line_or_empty(&self, number: usize) -> String {
        self.inner.line(number).unwrap_or_default()
    }

    fn is_po_box(line1: &str, candidate: &str) -> bool {
        NUMERIC_LINE.is_match(line1) || is_packstation(candidate)
    }
}

// https://en.wikipedia.org/wiki/Packstation
fn is_packstation(line: &str) -> bool {
    line.to_lowercase().contains("packstation")
}

impl<A: AddressView> AddressView for DeAddressDecorator<A> {
    /// Recombines the wrapped line slots by priority. The result holds the
    /// most specific street line first and carries the remaining lines only
    /// when they describe a P.O. box or Packstation, never a company.
    fn lines(&self) -> Vec<String> {
        let line1 = self.line_or_empty(1);
        let line2 = self.line_or_empty(2);
        let line3 = self.line_or_empty(3);

        let lines = if !line3.is_empty() {
            let first_two_lines = format!("{} {}", line1, line2);
            let mut lines = vec![line3];
            if Self::is_po_box(&line1, &first_two_lines) {
                lines.push(first_two_lines);
            }
            lines
        } else if !line2.is_empty() {
            let mut lines = vec![line2];
            if Self::is_po_box(&line1, &line1) {
                lines.push(line1);
            }
            lines
        } else if !line1.is_empty() {
            vec![line1]
        } else {
            Vec::new()
        };

        tracing::debug!("recombined DE address lines: {:?}", lines);
        lines
    }

    /// Promotes the leading line data to the company name unless it looks
    /// like a P.O. box or Packstation; otherwise the wrapped company wins.
    fn company(&self) -> Option<String> {
        let line1 = self.line_or_empty(1);
        let line2 = self.line_or_empty(2);
        let line3 = self.line_or_empty(3);

        if !line3.is_empty() {
            let first_two_lines = format!("{} {}", line1, line2);
            if !Self::is_po_box(&line1, &first_two_lines) {
                return Some(first_two_lines);
            }
        } else if !line2.is_empty() && !Self::is_po_box(&line1, &line1) {
            return Some(line1);
        }

        self.inner.company()
    }

    fn first_name(&self) -> String {
        self.inner.first_name()
    }

    fn last_name(&self) -> String {
        self.inner.last_name()
    }

    fn city(&self) -> String {
        self.inner.city()
    }

    fn state(&self) -> String {
        self.inner.state()
    }

    fn post_code(&self) -> String {
        self.inner.post_code()
    }

    fn country_code(&self) -> String {
        self.inner.country_code()
    }

    fn telephone(&self) -> String {
        self.inner.telephone()
    }

    fn line(&self, number: usize) -> Option<String> {
        self.inner.line(number)
    }

    fn set_name(&mut self, name: &str) {
        self.inner.set_name(name);
    }

    fn set_lines(&mut self, lines: Vec<String>) {
        self.inner.set_lines(lines);
    }

    fn set_city(&mut self, city: &str) {
        self.inner.set_city(city);
    }

    fn set_state(&mut self, state: &str) {
        self.inner.set_state(state);
    }

    fn set_post_code(&mut self, post_code: &str) {
        self.inner.set_post_code(post_code);
    }

    fn set_country_code(&mut self, country_code: &str) {
        self.inner.set_country_code(country_code);
    }

    fn set_telephone(&mut self, telephone: &str) {
        self.inner.set_telephone(telephone);
    }

    fn set_company(&mut self, company: &str) {
        self.inner.set_company(company);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Address;
    use serde_json::Map;

    fn decorate(line1: &str, line2: &str, line3: &str) -> DeAddressDecorator<Address> {
        let address = Address {
            line1: line1.to_string(),
            line2: line2.to_string(),
            line3: line3.to_string(),
            company: Some("Default GmbH".to_string()),
            first_name: "Erika".to_string(),
            last_name: "Mustermann".to_string(),
            city: "Berlin".to_string(),
            state: "BE".to_string(),
            post_code: "10115".to_string(),
            country_code: "DE".to_string(),
            telephone: "+49 30 123456".to_string(),
        };
        DeAddressDecorator::new(address, Map::new())
    }

    #[test]
    fn test_numeric_line1_with_three_lines_keeps_street_in_lines() {
        let decorated = decorate("123", "Hauptstr 5", "Apt 4");
        assert_eq!(decorated.lines(), vec!["Apt 4", "123 Hauptstr 5"]);
        assert_eq!(decorated.company().as_deref(), Some("Default GmbH"));
    }

    #[test]
    fn test_plain_line1_with_three_lines_becomes_company() {
        let decorated = decorate("ACME Handel", "Hauptstr 5", "Apt 4");
        assert_eq!(decorated.lines(), vec!["Apt 4"]);
        assert_eq!(decorated.company().as_deref(), Some("ACME Handel Hauptstr 5"));
    }

    #[test]
    fn test_packstation_in_combined_lines_stays_in_lines() {
        let decorated = decorate("Kunde 987", "Packstation 123", "Zusatz");
        assert_eq!(decorated.lines(), vec!["Zusatz", "Kunde 987 Packstation 123"]);
        assert_eq!(decorated.company().as_deref(), Some("Default GmbH"));
    }

    #[test]
    fn test_packstation_match_is_case_insensitive() {
        let decorated = decorate("Kunde 987", "PACKSTATION 123", "Zusatz");
        assert_eq!(decorated.lines(), vec!["Zusatz", "Kunde 987 PACKSTATION 123"]);
        assert_eq!(decorated.company().as_deref(), Some("Default GmbH"));
    }

    #[test]
    fn test_numeric_line1_with_two_lines_keeps_both_lines() {
        let decorated = decorate("456789", "Packstation 123", "");
        assert_eq!(decorated.lines(), vec!["Packstation 123", "456789"]);
        assert_eq!(decorated.company().as_deref(), Some("Default GmbH"));
    }

    #[test]
    fn test_plain_line1_with_two_lines_becomes_company() {
        let decorated = decorate("ACME Handel", "Hauptstr 5", "");
        assert_eq!(decorated.lines(), vec!["Hauptstr 5"]);
        assert_eq!(decorated.company().as_deref(), Some("ACME Handel"));
    }

    #[test]
    fn test_line1_only_passes_through_even_for_packstation() {
        // The Packstation check applies only when a later line exists.
        let decorated = decorate("Packstation 12", "", "");
        assert_eq!(decorated.lines(), vec!["Packstation 12"]);
        assert_eq!(decorated.company().as_deref(), Some("Default GmbH"));
    }

    #[test]
    fn test_all_lines_empty_yields_empty_sequence() {
        let decorated = decorate("", "", "");
        assert!(decorated.lines().is_empty());
        assert_eq!(decorated.company().as_deref(), Some("Default GmbH"));
    }

    #[test]
    fn test_numeric_check_accepts_signed_decimal_and_exponent_forms() {
        for line1 in ["123", " 42 ", "-7", "+8", "3.5", ".5", "1e3"] {
            let decorated = decorate(line1, "Hauptstr 5", "");
            assert_eq!(
                decorated.lines(),
                vec!["Hauptstr 5".to_string(), line1.to_string()],
                "line1 {:?} should read as numeric",
                line1
            );
        }
        for line1 in ["12a", "Hauptstr 5", "1 2", ""] {
            let decorated = decorate(line1, "Hauptstr 5", "");
            assert_eq!(
                decorated.lines(),
                vec!["Hauptstr 5"],
                "line1 {:?} should not read as numeric",
                line1
            );
        }
    }

    #[test]
    fn test_reads_reflect_later_mutation_of_wrapped_lines() {
        let mut decorated = decorate("ACME Handel", "Hauptstr 5", "");
        assert_eq!(decorated.company().as_deref(), Some("ACME Handel"));

        decorated.set_lines(vec!["321".to_string(), "Hauptstr 5".to_string()]);
        assert_eq!(decorated.lines(), vec!["Hauptstr 5", "321"]);
        assert_eq!(decorated.company().as_deref(), Some("Default GmbH"));
    }

    #[test]
    fn test_passthrough_members_match_wrapped_value() {
        let mut decorated = decorate("ACME Handel", "Hauptstr 5", "Apt 4");
        assert_eq!(decorated.first_name(), "Erika");
        assert_eq!(decorated.last_name(), "Mustermann");
        assert_eq!(decorated.city(), "Berlin");
        assert_eq!(decorated.state(), "BE");
        assert_eq!(decorated.post_code(), "10115");
        assert_eq!(decorated.country_code(), "DE");
        assert_eq!(decorated.telephone(), "+49 30 123456");
        assert_eq!(decorated.line(2).as_deref(), Some("Hauptstr 5"));
        assert_eq!(decorated.line(9), None);

        decorated.set_city("Hamburg");
        decorated.set_post_code("20095");
        decorated.set_name("Max Mustermann");
        assert_eq!(decorated.city(), "Hamburg");
        assert_eq!(decorated.post_code(), "20095");
        assert_eq!(decorated.first_name(), "Max");
    }
}
