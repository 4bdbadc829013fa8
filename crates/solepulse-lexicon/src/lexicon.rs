//! Valence tables. Values live on a -4..=4 scale; 0 means "not a sentiment
//! word" and such words are simply left out.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub(crate) const BOOST_INCR: f32 = 0.293;
pub(crate) const BOOST_DECR: f32 = -0.293;
pub(crate) const CAPS_INCR: f32 = 0.733;
pub(crate) const NEGATION_SCALAR: f32 = -0.74;

const GENERAL: &[(&str, f32)] = &[
    // positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bliss", 2.7),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("charming", 2.0),
    ("cheerful", 2.5),
    ("comfortable", 1.5),
    ("cool", 1.3),
    ("cute", 2.0),
    ("delight", 2.9),
    ("delighted", 2.9),
    ("delightful", 2.9),
    ("ecstatic", 2.3),
    ("elegant", 2.1),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("fine", 0.8),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("incredible", 2.2),
    ("joy", 2.8),
    ("lol", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("perfectly", 3.2),
    ("pleased", 1.9),
    ("pretty", 2.2),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("recommended", 0.8),
    ("satisfied", 1.8),
    ("solid", 1.2),
    ("stunning", 1.6),
    ("stylish", 1.5),
    ("superb", 3.1),
    ("sweet", 2.0),
    ("terrific", 2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("thrilled", 1.9),
    ("win", 2.8),
    ("winner", 2.8),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("wow", 2.8),
    ("yay", 2.4),
    // negative
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("cheap", -0.6),
    ("crap", -1.6),
    ("crappy", -2.5),
    ("damaged", -1.9),
    ("defective", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("expensive", -0.9),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fake", -2.1),
    ("garbage", -1.9),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hideous", -2.8),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("hurts", -2.1),
    ("lame", -1.8),
    ("mess", -1.5),
    ("miss", -0.6),
    ("missed", -1.2),
    ("pain", -2.3),
    ("painful", -1.9),
    ("pathetic", -2.2),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("refund", -0.6),
    ("regret", -1.9),
    ("ripoff", -2.1),
    ("sad", -2.1),
    ("scam", -2.8),
    ("scammed", -2.6),
    ("shame", -2.1),
    ("sucks", -1.5),
    ("terrible", -2.5),
    ("trash", -1.7),
    ("ugly", -2.3),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    ("yikes", -1.5),
    // emoticons and emoji
    (":)", 2.0),
    (":-)", 1.9),
    (":d", 2.3),
    ("<3", 1.9),
    (":(", -1.9),
    (":-(", -1.5),
    ("🔥", 2.2),
    ("😍", 2.6),
    ("👍", 1.8),
    ("❤️", 2.4),
    ("👎", -1.8),
    ("😡", -2.5),
    ("😭", -1.2),
];

// Community vocabulary layered over the general table; later entries win.
const SNEAKER_SLANG: &[(&str, f32)] = &[
    ("bricks", -1.8),
    ("brick", -1.5),
    ("clean", 1.2),
    ("comfy", 1.7),
    ("cooked", -1.2),
    ("cop", 0.9),
    ("copped", 1.3),
    ("creased", -1.0),
    ("creasing", -1.0),
    ("crispy", 1.5),
    ("durable", 1.2),
    ("fakes", -1.8),
    ("fire", 2.2),
    ("flop", -1.6),
    ("grail", 2.0),
    ("grails", 2.0),
    ("heat", 1.6),
    ("hyped", 1.0),
    ("legit", 1.4),
    ("mid", -1.0),
    ("overhyped", -1.4),
    ("overpriced", -1.8),
    ("scalpers", -1.5),
    ("slaps", 1.9),
    ("steal", 1.8),
    ("underrated", 1.0),
];

// Words that scale the valence of the sentiment word they precede.
const BOOSTERS: &[(&str, f32)] = &[
    ("absolutely", BOOST_INCR),
    ("completely", BOOST_INCR),
    ("deeply", BOOST_INCR),
    ("especially", BOOST_INCR),
    ("extremely", BOOST_INCR),
    ("hella", BOOST_INCR),
    ("highly", BOOST_INCR),
    ("incredibly", BOOST_INCR),
    ("insanely", BOOST_INCR),
    ("mad", BOOST_INCR),
    ("majorly", BOOST_INCR),
    ("most", BOOST_INCR),
    ("really", BOOST_INCR),
    ("so", BOOST_INCR),
    ("super", BOOST_INCR),
    ("too", BOOST_INCR),
    ("totally", BOOST_INCR),
    ("truly", BOOST_INCR),
    ("very", BOOST_INCR),
    ("almost", BOOST_DECR),
    ("barely", BOOST_DECR),
    ("fairly", BOOST_DECR),
    ("kinda", BOOST_DECR),
    ("marginally", BOOST_DECR),
    ("partly", BOOST_DECR),
    ("slightly", BOOST_DECR),
    ("somewhat", BOOST_DECR),
    ("sorta", BOOST_DECR),
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hardly", "hasnt", "havent",
    "isnt", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing", "nowhere", "rarely", "seldom",
    "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
];

pub(crate) static VALENCE: Lazy<HashMap<&'static str, f32>> =
    Lazy::new(|| GENERAL.iter().chain(SNEAKER_SLANG).copied().collect());

pub(crate) static BOOSTER: Lazy<HashMap<&'static str, f32>> = Lazy::new(|| BOOSTERS.iter().copied().collect());

pub(crate) fn is_negation(word: &str) -> bool {
    word.contains("n't") || word.contains("n’t") || NEGATIONS.contains(&word)
}
