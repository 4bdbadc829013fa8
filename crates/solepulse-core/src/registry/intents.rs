// Priority order, highest first. Some phrases ("for sale") appear under more
// than one category, and "just copped" is listed twice in completed_purchase,
// so its snippet is reported twice.
#[rustfmt::skip]
pub(super) const INTENT_PATTERNS: &[(&str, &[&str])] = &[
    ("completed_purchase", &[
        r"\bjust\s+copped\b",
        r"\bjust\s+bought\b",
        r"\bjust\s+got\b",
        r"\bpicked\s+up\b",
        r"\bsecured\s+the\s+bag\b",
        r"\bpulled\b.{0,20}\bpair\b",
        r"\bgot\s+(my|a|the)\s+(pair|set|cop)\b",
        r"\bcopped\b",
        r"\bjust\s+copped\b",
        r"\bordered\b.{0,10}\bshipping\b",
    ]),
    ("marketplace", &[
        r"\bWTS\b",
        r"\bWTB\b",
        r"\bWTT\b",
        r"\bfor\s+sale\b",
        r"\bselling\b.{0,20}\bpair\b",
        r"\bprice\s+check\b",
        r"\bPC\b.{0,10}\b(pair|shoe|sneaker)\b",
    ]),
    ("selling", &[
        r"\bfor\s+sale\b",
        r"\bselling\b",
        r"\blisting\b.{0,15}\b(pair|sneaker|shoe)\b",
        r"\bDM\s+for\s+price\b",
    ]),
    ("seeking_purchase", &[
        r"\bW2C\b",
        r"\bwhere\s+to\s+cop\b",
        r"\bwhere\s+can\s+I\s+(get|buy|find|cop)\b",
        r"\bwhere\s+to\s+buy\b",
        r"\bany\s+(chance|way)\s+to\s+(get|cop|buy)\b",
        r"\blooking\s+(for|to\s+buy|to\s+cop)\b",
    ]),
    ("purchase_consideration", &[
        r"\bshould\s+I\s+(cop|buy|get)\b",
        r"\bworth\s+(it|the\s+price|copping)\b",
        r"\bconsidering\b.{0,20}\b(cop|buy|get|purchase)\b",
        r"\bthinking\s+(of|about)\s+(buying|copping|getting)\b",
        r"\btempted\b.{0,20}\b(cop|buy)\b",
    ]),
    ("availability_info", &[
        r"\bdrops?\s+at\b",
        r"\breleases?\s+on\b",
        r"\bavailable\s+(at|on|in)\b",
        r"\brestocked?\b",
        r"\bsold\s+out\b",
        r"\bin\s+stock\b",
        r"\brelease\s+date\b",
    ]),
    ("price_discussion", &[
        r"\bpaid\s+\$[\d,]+",
        r"\basks?\s+\$[\d,]+",
        r"\bretail\s+\$[\d,]+",
        r"\bmarket\s+(price|value)\b",
        r"\bpremium\b.{0,15}\b(price|retail)\b",
        r"\b(price|cost|value)\b.{0,10}\b(thoughts?|opinion|fair|high|low)\b",
    ]),
];
