#[rustfmt::skip]
pub(super) const BRAND_ALIASES: &[(&str, &[&str])] = &[
    ("Nike", &["Nike", "Swoosh", "Just Do It", "Air Force", "Air Max", "Air Jordan", "Jordan Brand", "Jordan", "Dunk", "React"]),
    ("Adidas", &["Adidas", "Adidas Originals", "Three Stripes", "3 Stripes", "Yeezy", "Ultraboost", "NMD", "Stan Smith", "Samba", "Gazelle"]),
    ("Li-Ning", &["Li-Ning", "Li Ning", "LiNing", "LN", "Way of Wade", "WoW", "ANTA Sports Li-Ning"]),
    ("Anta", &["Anta", "ANTA", "Klay Thompson", "KT"]),
    ("361 Degrees", &["361", "361 Degrees", "361°"]),
    ("Under Armour", &["Under Armour", "UA", "Curry Brand", "Curry N", "Curry shoes"]),
    ("New Balance", &["New Balance", "NB", "990", "993", "1906", "2002"]),
    ("Puma", &["Puma", "PUMA"]),
    ("Asics", &["Asics", "ASICS", "Gel-Kayano", "Gel Kayano", "GT-2000"]),
    ("Hoka", &["Hoka", "HOKA", "Hoka One One", "Clifton", "Bondi"]),
];
