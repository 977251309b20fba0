/// Read/write contract exposed by every address-shaped value in the checkout
/// flow. Line slots are 1-based and there are always three of them, possibly
/// empty; `line(n)` returns `None` only for an out-of-range slot number.
///
/// Locale decorators wrap an implementation of this trait and override a
/// subset of the readers while forwarding everything else.
pub trait AddressView {
    fn lines(&self) -> Vec<String>;
    fn company(&self) -> Option<String>;
    fn first_name(&self) -> String;
    fn last_name(&self) -> String;
    fn city(&self) -> String;
    fn state(&self) -> String;
    fn post_code(&self) -> String;
    fn country_code(&self) -> String;
    fn telephone(&self) -> String;
    fn line(&self, number: usize) -> Option<String>;

    fn set_name(&mut self, name: &str);
    fn set_lines(&mut self, lines: Vec<String>);
    fn set_city(&mut self, city: &str);
    fn set_state(&mut self, state: &str);
    fn set_post_code(&mut self, post_code: &str);
    fn set_country_code(&mut self, country_code: &str);
    fn set_telephone(&mut self, telephone: &str);
    fn set_company(&mut self, company: &str);
}
