//! The static category catalog
//!
//! Two disjoint namespaces of category definitions (income and expense)
//! with the keyword lists the classifier matches against. The tables are
//! fixed at compile time and declaration order is significant: the
//! classifier resolves equal-length keyword ties in favour of the earliest
//! entry, so reordering changes classification results.
//!
//! Each namespace ends with a keyword-less catch-all (`other_income` /
//! `personal_other`) which guarantees the classifier always has somewhere
//! to land.

use crate::models::{CategoryDef, Direction, GstCode};

/// Key of the income-side catch-all category
pub const CATCH_ALL_INCOME: &str = "other_income";

/// Key of the expense-side catch-all category
pub const CATCH_ALL_EXPENSE: &str = "personal_other";

/// Income categories, in classification priority order
pub static INCOME_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "salary_income",
        label: "Salary / Wages",
        icon: "💰",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[
            "salary", "payroll", "wage", "direct deposit", "pay run", "fortnightly pay",
            "weekly pay", "employer", "payg",
        ],
    },
    CategoryDef {
        key: "sales_income",
        label: "Sales / Revenue",
        icon: "🛒",
        gst: GstCode::Gst,
        deductible: false,
        keywords: &[
            "invoice", "payment received", "client payment", "sale", "revenue", "pos", "square",
            "shopify", "stripe transfer", "paypal transfer",
        ],
    },
    CategoryDef {
        key: "freelance_income",
        label: "Freelance / Contract",
        icon: "💻",
        gst: GstCode::Gst,
        deductible: false,
        keywords: &[
            "freelance", "consulting", "contract", "abn", "contractor", "fiverr", "upwork",
            "toptal",
        ],
    },
    CategoryDef {
        key: "interest_income",
        label: "Interest Income",
        icon: "🏦",
        gst: GstCode::InputTaxed,
        deductible: false,
        keywords: &[
            "interest", "savings interest", "term deposit", "ing interest", "ubank interest",
            "bonus interest",
        ],
    },
    CategoryDef {
        key: "investment_income",
        label: "Investment Income",
        icon: "📈",
        gst: GstCode::GstFree,
        deductible: false,
        keywords: &[
            "dividend", "distribution", "vanguard", "betashares", "capital gain", "etf", "shares",
            "commsec", "selfwealth", "stake",
        ],
    },
    CategoryDef {
        key: "govt_income",
        label: "Government Payments",
        icon: "🏛️",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[
            "centrelink", "jobseeker", "youth allowance", "austudy", "family tax benefit",
            "child care subsidy", "services australia", "ato refund", "tax refund", "gst refund",
        ],
    },
    CategoryDef {
        key: "rental_income",
        label: "Rental Income",
        icon: "🏘️",
        gst: GstCode::GstFree,
        deductible: false,
        keywords: &[
            "rent received", "tenant", "rental income", "property income", "airbnb income",
        ],
    },
    CategoryDef {
        key: "other_income",
        label: "Other Income",
        icon: "🎁",
        gst: GstCode::GstFree,
        deductible: false,
        keywords: &[],
    },
];

/// Expense categories, in classification priority order
///
/// Business-deductible categories first, then personal, ending with the
/// catch-all.
pub static EXPENSE_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "advertising",
        label: "Advertising & Marketing",
        icon: "📣",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "google ads", "facebook ads", "meta ads", "instagram", "tiktok ads", "linkedin ads",
            "marketing", "advertising", "ad spend", "seo", "sem", "mailchimp", "hubspot",
            "sendinblue", "convertkit", "flyer", "signage", "business cards", "vistaprint",
        ],
    },
    CategoryDef {
        key: "vehicle",
        label: "Motor Vehicle",
        icon: "🚗",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "fuel", "petrol", "diesel", "bp ", "shell", "caltex", "ampol", "7-eleven fuel",
            "united fuel", "rego", "registration", "car service", "car wash", "mechanic", "repco",
            "supercheap auto", "parking", "wilson parking", "secure parking", "toll", "linkt",
            "etoll", "citylink", "eastlink", "go via", "roam", "nrma", "racq", "racv", "raa",
        ],
    },
    CategoryDef {
        key: "office",
        label: "Office Supplies",
        icon: "🖥️",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "officeworks", "stationery", "printer", "ink", "toner", "paper", "desk", "chair",
            "monitor", "keyboard", "mouse", "headset", "webcam", "usb", "hard drive", "ssd",
        ],
    },
    CategoryDef {
        key: "equipment",
        label: "Equipment & Tools",
        icon: "🔧",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "bunnings", "tools", "equipment", "hardware", "laptop", "computer", "ipad", "tablet",
            "camera", "jb hi-fi", "jb hifi", "harvey norman", "apple store", "dell", "lenovo",
        ],
    },
    CategoryDef {
        key: "rent_business",
        label: "Rent (Business)",
        icon: "🏢",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "office rent", "coworking", "wework", "workspace", "studio rent", "commercial rent",
            "warehouse",
        ],
    },
    CategoryDef {
        key: "phone_internet",
        label: "Phone & Internet",
        icon: "📱",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "telstra", "optus", "vodafone", "tpg", "aussie broadband", "iinet", "dodo", "belong",
            "amaysim", "boost mobile", "aldi mobile", "felix", "spintel", "nbn", "internet",
            "phone plan", "mobile plan", "sim",
        ],
    },
    CategoryDef {
        key: "power_utilities",
        label: "Utilities (Business)",
        icon: "⚡",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "origin energy", "agl", "energy australia", "energyaustralia", "alinta", "red energy",
            "lumo", "powershop", "electricity", "electric", "gas bill", "water bill",
            "council rates",
        ],
    },
    CategoryDef {
        key: "insurance_biz",
        label: "Insurance (Business)",
        icon: "🛡️",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "public liability", "professional indemnity", "business insurance",
            "income protection", "workers comp", "bizcover",
        ],
    },
    CategoryDef {
        key: "subscriptions",
        label: "Software & Subscriptions",
        icon: "💿",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "adobe", "xero", "myob", "quickbooks", "reckon", "canva", "figma", "notion", "slack",
            "zoom", "microsoft 365", "google workspace", "dropbox", "github", "aws", "azure",
            "heroku", "vercel", "netlify", "domain", "hosting", "godaddy", "cloudflare",
            "namecheap", "siteground", "squarespace", "wix", "wordpress", "saas", "software",
            "app store", "play store",
        ],
    },
    CategoryDef {
        key: "professional",
        label: "Professional Services",
        icon: "👔",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "accountant", "h&r block", "tax agent", "tax return", "lawyer", "solicitor", "legal",
            "bookkeeper", "bas agent", "financial adviser", "planner", "architect", "engineer",
        ],
    },
    CategoryDef {
        key: "travel",
        label: "Travel (Business)",
        icon: "✈️",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "flight", "qantas", "jetstar", "virgin australia", "rex airlines", "tigerair",
            "hotel", "airbnb", "booking.com", "expedia", "wotif", "accommodation", "motel",
            "serviced apartment",
        ],
    },
    CategoryDef {
        key: "meals_ent",
        label: "Meals & Entertainment",
        icon: "🍽️",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "restaurant", "cafe", "coffee", "mcdonald", "kfc", "subway", "dominos", "pizza hut",
            "hungry jack", "guzman", "nando", "sushi", "thai", "indian", "chinese", "vietnamese",
            "uber eats", "deliveroo", "menulog", "doordash", "grubhub",
        ],
    },
    CategoryDef {
        key: "bank_fees",
        label: "Bank & Merchant Fees",
        icon: "🏦",
        gst: GstCode::InputTaxed,
        deductible: true,
        keywords: &[
            "bank fee", "account fee", "monthly fee", "overdrawn", "merchant fee", "stripe fee",
            "paypal fee", "square fee", "afterpay fee", "zip fee", "eftpos", "atm fee",
            "international fee", "currency conversion",
        ],
    },
    CategoryDef {
        key: "education",
        label: "Training & Education",
        icon: "📚",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &[
            "course", "udemy", "coursera", "skillshare", "linkedin learning", "pluralsight",
            "training", "workshop", "seminar", "conference", "summit", "bootcamp",
            "certification",
        ],
    },
    CategoryDef {
        key: "home_office",
        label: "Home Office",
        icon: "🏡",
        gst: GstCode::Gst,
        deductible: true,
        keywords: &["home office", "work from home", "wfh"],
    },
    CategoryDef {
        key: "super_contribution",
        label: "Superannuation",
        icon: "🏦",
        gst: GstCode::BasExcluded,
        deductible: true,
        keywords: &[
            "super contribution", "superannuation", "super fund", "australian super", "hostplus",
            "sunsuper", "rest super", "cbus", "unisuper", "aware super", "smsf",
        ],
    },
    CategoryDef {
        key: "housing",
        label: "Housing / Rent",
        icon: "🏠",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[
            "rent", "mortgage", "home loan", "strata", "body corp", "council rates", "land tax",
        ],
    },
    CategoryDef {
        key: "groceries",
        label: "Groceries",
        icon: "🛒",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[
            "woolworths", "woolies", "coles", "aldi", "iga", "costco", "harris farm", "grocery",
            "supermarket", "food", "butcher", "baker", "fruit", "veg", "market",
        ],
    },
    CategoryDef {
        key: "health",
        label: "Health & Medical",
        icon: "🏥",
        gst: GstCode::GstFree,
        deductible: false,
        keywords: &[
            "doctor", "gp", "pharmacy", "chemist warehouse", "priceline pharmacy", "terry white",
            "dental", "dentist", "optometrist", "specsavers", "opsm", "physio", "physiotherapy",
            "chiro", "chiropractor", "pathology", "radiology", "hospital", "medical", "medicare",
            "medibank", "bupa", "nib", "hbf", "hcf", "ahm", "health insurance",
        ],
    },
    CategoryDef {
        key: "transport_personal",
        label: "Transport (Personal)",
        icon: "🚌",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[
            "uber", "lyft", "didi", "ola", "taxi", "13cabs", "opal", "myki", "go card",
            "metrocard", "smartrider", "translink", "bus", "train", "tram", "ferry",
        ],
    },
    CategoryDef {
        key: "shopping",
        label: "Shopping (Personal)",
        icon: "🛍️",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[
            "amazon", "ebay", "kmart", "target", "big w", "ikea", "freedom", "catch.com",
            "temple & webster", "clothing", "cotton on", "uniqlo", "h&m", "zara", "myer",
            "david jones", "country road", "rebel sport", "bcf", "anaconda",
        ],
    },
    CategoryDef {
        key: "entertainment",
        label: "Entertainment",
        icon: "🎬",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[
            "netflix", "spotify", "disney", "stan", "binge", "kayo", "foxtel", "paramount",
            "apple tv", "youtube premium", "cinema", "hoyts", "event cinema", "village cinema",
            "movie", "game", "playstation", "xbox", "steam", "nintendo", "ticket", "ticketek",
            "ticketmaster", "eventbrite", "concert", "festival", "gym", "anytime fitness",
            "fitness first", "f45",
        ],
    },
    CategoryDef {
        key: "kids_family",
        label: "Kids & Family",
        icon: "👶",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[
            "childcare", "child care", "daycare", "kindy", "kindergarten", "school fees",
            "school", "uniform", "baby bunting", "toys r us", "toy world",
        ],
    },
    CategoryDef {
        key: "insurance_personal",
        label: "Insurance (Personal)",
        icon: "🛡️",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[
            "car insurance", "home insurance", "contents insurance", "life insurance",
            "nrma insurance", "allianz", "suncorp", "qbe", "aami", "gio", "youi",
            "budget direct", "real insurance",
        ],
    },
    CategoryDef {
        key: "donations",
        label: "Donations & Gifts",
        icon: "❤️",
        gst: GstCode::GstFree,
        deductible: true,
        keywords: &[
            "donation", "charity", "dgr", "red cross", "salvation army", "smith family",
            "unicef", "world vision", "oxfam", "beyond blue", "gofundme",
        ],
    },
    CategoryDef {
        key: "personal_other",
        label: "Other / Uncategorized",
        icon: "📦",
        gst: GstCode::BasExcluded,
        deductible: false,
        keywords: &[],
    },
];

/// All categories in a direction's namespace, in declaration order
pub fn categories(direction: Direction) -> &'static [CategoryDef] {
    match direction {
        Direction::Income => INCOME_CATEGORIES,
        Direction::Expense => EXPENSE_CATEGORIES,
    }
}

/// Look up a category by direction and key
pub fn category(direction: Direction, key: &str) -> Option<&'static CategoryDef> {
    categories(direction).iter().find(|c| c.key == key)
}

/// The keyword search space for a direction: ordered (key, keyword) pairs
pub fn keyword_pairs(
    direction: Direction,
) -> impl Iterator<Item = (&'static str, &'static str)> {
    categories(direction)
        .iter()
        .flat_map(|c| c.keywords.iter().map(move |kw| (c.key, *kw)))
}

/// The catch-all category for a direction
pub fn catch_all(direction: Direction) -> &'static CategoryDef {
    let key = match direction {
        Direction::Income => CATCH_ALL_INCOME,
        Direction::Expense => CATCH_ALL_EXPENSE,
    };
    category(direction, key).expect("catalog defines a catch-all per namespace")
}

/// Check whether a key is one of the catch-all categories (either direction)
pub fn is_catch_all_key(key: &str) -> bool {
    key == CATCH_ALL_INCOME || key == CATCH_ALL_EXPENSE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_unique_within_namespace() {
        for &direction in Direction::all() {
            let mut seen = HashSet::new();
            for cat in categories(direction) {
                assert!(
                    seen.insert(cat.key),
                    "duplicate key {} in {} namespace",
                    cat.key,
                    direction
                );
            }
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for &direction in Direction::all() {
            for (key, kw) in keyword_pairs(direction) {
                assert_eq!(kw, kw.to_lowercase(), "keyword {:?} in {}", kw, key);
            }
        }
    }

    #[test]
    fn test_catch_alls_present_and_keywordless() {
        let income = catch_all(Direction::Income);
        assert_eq!(income.key, CATCH_ALL_INCOME);
        assert!(income.is_catch_all());

        let expense = catch_all(Direction::Expense);
        assert_eq!(expense.key, CATCH_ALL_EXPENSE);
        assert!(expense.is_catch_all());
    }

    #[test]
    fn test_income_never_deductible() {
        for cat in INCOME_CATEGORIES {
            assert!(!cat.deductible, "{} must not be deductible", cat.key);
        }
    }

    #[test]
    fn test_lookup() {
        let vehicle = category(Direction::Expense, "vehicle").unwrap();
        assert!(vehicle.deductible);
        assert_eq!(vehicle.gst, crate::models::GstCode::Gst);

        // Namespaces are disjoint: income keys are invisible on the expense side
        assert!(category(Direction::Expense, "sales_income").is_none());
        assert!(category(Direction::Income, "vehicle").is_none());
        assert!(category(Direction::Income, "sales_income").is_some());
    }

    #[test]
    fn test_keyword_pairs_ordering() {
        // First expense pair comes from the first category's first keyword
        let first = keyword_pairs(Direction::Expense).next().unwrap();
        assert_eq!(first, ("advertising", "google ads"));
    }

    #[test]
    fn test_namespace_sizes() {
        assert_eq!(INCOME_CATEGORIES.len(), 8);
        assert_eq!(EXPENSE_CATEGORIES.len(), 26);
    }
}
