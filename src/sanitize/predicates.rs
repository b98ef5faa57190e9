use regex::Regex;

const GENERIC_EMAIL_DOMAINS: [&str; 5] = [
    "example.com",
    "example.org",
    "example.net",
    "test.com",
    "localhost",
];

const GENERIC_LOCATIONS: [&str; 7] = [
    "anytown",
    "springfield",
    "riverside",
    "lakeside",
    "hilltown",
    "usa",
    "united states",
];

const REAL_CITIES: [&str; 11] = [
    "lisbon",
    "lisboa",
    "porto",
    "faro",
    "braga",
    "coimbra",
    "aveiro",
    "évora",
    "setúbal",
    "funchal",
    "ponta delgada",
];

const ADDRESS_INDICATORS: [&str; 6] = ["st,", "ave,", "rd,", "street,", "avenue,", "road,"];

fn is_match(pattern: &str, text: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

/// True when the email uses a reserved or test domain.
pub fn is_generic_email(email: &str) -> bool {
    let lower = email.to_lowercase();
    GENERIC_EMAIL_DOMAINS
        .iter()
        .any(|domain| lower.contains(domain))
}

/// True when the phone number is a fictional or premium-rate placeholder.
pub fn is_generic_phone(phone: &str) -> bool {
    if is_match(r"\+1\s*555", phone) || is_match(r"\+44\s*20\s*7946", phone) {
        return true;
    }

    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    is_match(r"^555[-\s]?\d{4}$", &cleaned) || is_match(r"^900\d{6}$", &cleaned)
}

/// True when the text names one of the known real cities.
pub fn contains_real_city(text: &str) -> bool {
    let lower = text.to_lowercase();
    REAL_CITIES.iter().any(|city| lower.contains(city))
}

/// True when the text mentions a placeholder location and no real city.
pub fn is_generic_location(text: &str) -> bool {
    let lower = text.to_lowercase();
    GENERIC_LOCATIONS.iter().any(|place| lower.contains(place)) && !contains_real_city(&lower)
}

/// True when the text carries a street-type token followed by a comma.
pub fn looks_like_address(text: &str) -> bool {
    let lower = text.to_lowercase();
    ADDRESS_INDICATORS
        .iter()
        .any(|indicator| lower.contains(indicator))
}
