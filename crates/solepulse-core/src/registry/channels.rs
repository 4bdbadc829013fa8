pub(super) const DOMAIN_TO_CHANNEL: &[(&str, &str)] = &[
    ("nike.com", "Nike Direct"),
    ("snkrs.com", "Nike Direct"),
    ("adidas.com", "Adidas Direct"),
    ("adidas.us", "Adidas Direct"),
    ("stockx.com", "StockX"),
    ("goat.com", "GOAT"),
    ("footlocker.com", "Foot Locker"),
    ("footaction.com", "Foot Locker"),
    ("kidsfootlocker.com", "Foot Locker"),
    ("champssports.com", "Champs Sports"),
    ("eastbay.com", "Eastbay"),
    ("dickssportinggoods.com", "Dick's Sporting Goods"),
    ("finishline.com", "Finish Line"),
    ("amazon.com", "Amazon"),
    ("amazon.co.jp", "Amazon JP"),
    ("farfetch.com", "Farfetch"),
    ("ssense.com", "SSENSE"),
    ("jdsports.co.uk", "JD Sports"),
    ("jdsports.com", "JD Sports"),
    ("size.co.uk", "Size?"),
    ("kith.com", "Kith"),
    ("solefly.com", "Solefly"),
    ("undefeated.com", "Undefeated"),
    ("consortium.adidas.com", "Adidas Consortium"),
    ("concepts.ltd", "Concepts"),
    ("bodega.com", "Bodega"),
    ("socialstatuspgh.com", "Social Status"),
    ("kicksusa.com", "KicksUSA"),
    ("sneakersnstuff.com", "Sneakersnstuff"),
    ("end.com", "END Clothing"),
    ("offspring.co.uk", "Offspring"),
    // resale
    ("ebay.com", "eBay"),
    ("grailed.com", "Grailed"),
    ("depop.com", "Depop"),
    ("flightclub.com", "Flight Club"),
    ("klekt.com", "Klekt"),
    // running specialty
    ("runningwarehouse.com", "Running Warehouse"),
    ("rei.com", "REI"),
    ("holabird.com", "Holabird Sports"),
];

// "rei" is left out on purpose: too short to match safely in prose.
pub(super) const KEYWORD_TO_CHANNEL: &[(&str, &str)] = &[
    ("stockx", "StockX"),
    ("goat", "GOAT"),
    ("foot locker", "Foot Locker"),
    ("footlocker", "Foot Locker"),
    ("dick's", "Dick's Sporting Goods"),
    ("dicks", "Dick's Sporting Goods"),
    ("finish line", "Finish Line"),
    ("amazon", "Amazon"),
    ("nike direct", "Nike Direct"),
    ("snkrs", "Nike Direct"),
    ("adidas direct", "Adidas Direct"),
    ("kith", "Kith"),
    ("flight club", "Flight Club"),
    ("grailed", "Grailed"),
    ("depop", "Depop"),
    ("farfetch", "Farfetch"),
    ("ssense", "SSENSE"),
    ("jd sports", "JD Sports"),
    ("end clothing", "END Clothing"),
    ("undefeated", "Undefeated"),
    ("concepts", "Concepts"),
    ("bodega", "Bodega"),
    ("ebay", "eBay"),
];
