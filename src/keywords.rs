use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::warn;

/// Curated names considered unambiguous enough to identify a provider on
/// their own. Checked ahead of the general provider keyword list, and short
/// entries bypass the minimum-length filter applied to general keywords.
/// Order defines match priority.
pub static STRONG_BRANDS: &[&str] = &[
    // Airlines
    "Delta", "American Airlines", "United", "Southwest", "JetBlue", "Alaska", "Spirit", "Frontier",
    "Hawaiian Airlines", "Allegiant", "Sun Country", "British Airways", "Lufthansa", "Air France",
    "KLM", "Qantas", "Emirates", "Qatar Airways", "Singapore Airlines", "Turkish Airlines",
    "Air Canada", "ANA", "JAL", "Aeromexico", "Avianca", "Copa Airlines", "LATAM",
    // Banks & financial
    "Chase", "Bank of America", "Wells Fargo", "Citi", "Citibank", "PNC", "Capital One", "US Bank", "Barclays",
    "ING", "HSBC", "Santander", "TD Bank", "BBVA", "SunTrust", "Regions", "Fifth Third", "KeyBank",
    "Ally", "Charles Schwab", "Fidelity", "Robinhood", "Vanguard", "PayPal", "Venmo", "Zelle",
    "Discover", "Synchrony", "American Express", "Mastercard", "Visa", "BMO", "M&T Bank", "Huntington",
    "Citizens Bank", "First Republic", "Silicon Valley Bank", "Truist", "Navy Federal", "USAA", "BECU",
    "TD Ameritrade", "Morgan Stanley", "Goldman Sachs", "Credit Suisse", "UBS", "RBC", "Scotiabank",
    "Desjardins", "CIBC", "National Bank", "Société Générale", "BNP Paribas", "Deutsche Bank",
    // Restaurants
    "McDonald's", "Burger King", "Wendy's", "Taco Bell", "KFC", "Subway", "Domino's", "Pizza Hut",
    "Papa John's", "Dunkin' Donuts", "Starbucks", "Chipotle", "Panera", "Chick-fil-A", "Sonic",
    "Arby's", "Jack in the Box", "Little Caesars", "Panda Express", "Five Guys", "Culver's",
    "In-N-Out", "Shake Shack", "Buffalo Wild Wings", "Applebee's", "Olive Garden", "Red Lobster",
    "Outback Steakhouse", "IHOP", "Denny's", "Cheesecake Factory", "Texas Roadhouse", "Chili's",
    "Cracker Barrel", "Carrabba's", "Bonefish Grill", "P.F. Chang's", "Ruth's Chris",
    // Retailers & online
    "Lowe's", "Home Depot", "Costco", "Walmart", "Target", "Amazon", "Apple", "Google", "Microsoft",
    "Best Buy", "Staples", "Office Depot", "Sam's Club", "Kroger", "Publix", "Walgreens", "CVS",
    "Rite Aid", "Macy's", "Nordstrom", "Kohl's", "JCPenney", "Sears", "IKEA", "Wayfair",
    // Travel & hospitality
    "Hilton", "Marriott", "Hyatt", "IHG", "Holiday Inn", "Hampton", "Sheraton", "Westin", "Radisson",
    "Expedia", "Booking.com", "Airbnb", "VRBO", "Enterprise", "Hertz", "Avis", "Budget", "National",
    "Uber", "Lyft", "Amtrak", "Greyhound",
    // Utilities & telecom
    "Comcast", "Xfinity", "AT&T", "Verizon", "T-Mobile", "Sprint", "Spectrum", "Cox", "DirectTV",
    // Insurance & medical
    "Aetna", "Cigna", "UnitedHealthcare", "Blue Cross", "Kaiser", "MetLife", "Allstate", "State Farm",
    "Geico", "Progressive", "Liberty Mutual", "Humana", "Anthem", "Guardian", "Mutual of Omaha",
    "Transamerica", "Prudential", "New York Life", "MassMutual", "Banner Life", "Lincoln Financial",
    "Delta Dental", "VSP", "Blue Shield", "Health Net", "Oscar", "Molina", "Centene", "WellCare",
    "Magellan", "Cleveland Clinic", "Mayo Clinic", "Johns Hopkins", "HCA Healthcare",
    "Tenet Healthcare", "Ascension", "Sutter Health", "Dignity Health",
    // Education & nonprofit
    "MIT", "Harvard", "Stanford", "Yale", "Princeton", "Cornell", "UCLA", "NYU", "Columbia",
    "St. Jude", "Red Cross", "UNICEF", "Doctors Without Borders",
    // Government & tax
    "IRS", "Social Security", "US Treasury", "DMV", "SSA", "Medicare", "Medicaid",
];

static STRONG_BRAND_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STRONG_BRANDS.iter().copied().collect());

/// Whether a general keyword is also on the strong-brand list. Such keywords
/// skip the minimum-length filter in the provider cascade.
pub fn is_strong_brand(keyword: &str) -> bool {
    STRONG_BRAND_SET.contains(keyword)
}

/// Load a line-delimited keyword list. Lines are trimmed, empty lines are
/// dropped, and file order is preserved (it defines match priority). A
/// missing or unreadable file yields an empty list, never an error.
pub fn load_keywords(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        Err(_) => {
            warn!("keyword file not found: {}; using empty list", path.display());
            Vec::new()
        }
    }
}

/// The provider and purpose keyword lists, loaded once at startup and shared
/// read-only across every classification call.
#[derive(Debug, Clone, Default)]
pub struct KeywordCorpus {
    pub providers: Vec<String>,
    pub purposes: Vec<String>,
}

impl KeywordCorpus {
    pub fn load(provider_path: &Path, purpose_path: &Path) -> Self {
        KeywordCorpus {
            providers: load_keywords(provider_path),
            purposes: load_keywords(purpose_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_preserves_order_and_drops_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Chase\n\n  Verizon  \n\ninvoice").unwrap();
        let keywords = load_keywords(file.path());
        assert_eq!(keywords, vec!["Chase", "Verizon", "invoice"]);
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let keywords = load_keywords(Path::new("/nonexistent/provider_keywords.txt"));
        assert!(keywords.is_empty());
    }

    #[test]
    fn strong_brand_membership() {
        assert!(is_strong_brand("Chase"));
        assert!(is_strong_brand("IRS"));
        assert!(!is_strong_brand("chase"));
        assert!(!is_strong_brand("Some Local Shop"));
    }
}
