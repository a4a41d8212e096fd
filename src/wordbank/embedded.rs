// Embedded word categories and fun facts
//
// Fixed at startup; the game never mutates these.

/// Word categories: display name paired with its candidate words
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Animals",
        &[
            "elephant",
            "giraffe",
            "penguin",
            "dolphin",
            "kangaroo",
            "butterfly",
            "crocodile",
            "octopus",
            "peacock",
            "rhinoceros",
        ],
    ),
    (
        "Countries",
        &[
            "brazil", "japan", "egypt", "canada", "australia", "france", "india", "mexico",
            "norway", "thailand",
        ],
    ),
    (
        "Technology",
        &[
            "computer",
            "internet",
            "software",
            "database",
            "algorithm",
            "encryption",
            "blockchain",
            "artificial",
            "programming",
            "network",
        ],
    ),
    (
        "Sports",
        &[
            "basketball",
            "football",
            "tennis",
            "swimming",
            "volleyball",
            "cricket",
            "baseball",
            "hockey",
            "golf",
            "boxing",
        ],
    ),
    (
        "Food",
        &[
            "pizza",
            "hamburger",
            "spaghetti",
            "chocolate",
            "sandwich",
            "pancake",
            "burrito",
            "sushi",
            "croissant",
            "lasagna",
        ],
    ),
];

/// Sparse word -> fun fact table shown after a round
///
/// Not every word has an entry; absence just means no fact is printed.
pub const FACTS: &[(&str, &str)] = &[
    ("elephant", "Largest land animal with a trunk"),
    ("giraffe", "Tallest animal with a long neck"),
    ("penguin", "Flightless bird that thrives in Antarctica"),
    ("octopus", "Has three hearts and blue blood"),
    ("kangaroo", "Marsupial that cannot walk backwards"),
    ("brazil", "Largest country in South America"),
    ("japan", "Island nation known as the Land of the Rising Sun"),
    ("egypt", "Home of the Great Pyramid of Giza"),
    ("australia", "Country that is also a continent"),
    ("norway", "Scandinavian country famous for its fjords"),
    ("computer", "Electronic device for processing data"),
    ("algorithm", "Step-by-step procedure for solving a problem"),
    ("encryption", "Scrambling data so only key holders can read it"),
    ("blockchain", "Distributed ledger of linked blocks"),
    ("basketball", "Sport played with a hoop and ball"),
    ("cricket", "Bat-and-ball game with wickets and overs"),
    ("swimming", "Olympic sport raced in a 50 metre pool"),
    ("pizza", "Italian dish with cheese and toppings"),
    ("sushi", "Japanese dish of vinegared rice and fish"),
    ("croissant", "Flaky crescent-shaped French pastry"),
];
