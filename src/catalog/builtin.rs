use crate::catalog::Genre;

/// Default artist lists, twenty per genre, in crawl order
pub(crate) fn builtin_artists(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::HipHop => &[
            "kendrick lamar",
            "j cole",
            "drake",
            "tyler the creator",
            "kanye west",
            "travis scott",
            "asap rocky",
            "eminem",
            "lil wayne",
            "jay z",
            "megan thee stallion",
            "cardi b",
            "nicki minaj",
            "future",
            "21 savage",
            "post malone",
            "jack harlow",
            "lil baby",
            "lil durk",
            "gunna",
        ],
        Genre::Rnb => &[
            "the weeknd",
            "sza",
            "frank ocean",
            "daniel caesar",
            "her",
            "summer walker",
            "bryson tiller",
            "chris brown",
            "usher",
            "jhene aiko",
            "kehlani",
            "brent faiyaz",
            "lucky daye",
            "giveon",
            "ella mai",
            "jorja smith",
            "doja cat",
            "khalid",
            "6lack",
            "ari lennox",
        ],
        Genre::Pop => &[
            "taylor swift",
            "ed sheeran",
            "ariana grande",
            "justin bieber",
            "billie eilish",
            "harry styles",
            "dua lipa",
            "the kid laroi",
            "olivia rodrigo",
            "post malone",
            "shawn mendes",
            "camila cabello",
            "charlie puth",
            "halsey",
            "selena gomez",
            "bruno mars",
            "adele",
            "sam smith",
            "lizzo",
            "lil nas x",
        ],
        Genre::Country => &[
            "luke combs",
            "morgan wallen",
            "kane brown",
            "chris stapleton",
            "carrie underwood",
            "luke bryan",
            "thomas rhett",
            "kelsea ballerini",
            "dan + shay",
            "miranda lambert",
            "blake shelton",
            "keith urban",
            "jason aldean",
            "maren morris",
            "zac brown band",
            "florida georgia line",
            "tim mcgraw",
            "kenny chesney",
            "dierks bentley",
            "eric church",
        ],
        Genre::Jazz => &[
            "kamasi washington",
            "robert glasper",
            "esperanza spalding",
            "christian scott",
            "cory henry",
            "jacob collier",
            "snarky puppy",
            "thundercat",
            "gregory porter",
            "norah jones",
            "kurt elling",
            "cecile mclorin salvant",
            "brad mehldau",
            "ambrose akinmusire",
            "vijay iyer",
            "chris potter",
            "christian mcbride",
            "joey alexander",
            "makaya mccraven",
            "terrace martin",
        ],
        Genre::African => &[
            "burna boy",
            "wizkid",
            "davido",
            "tems",
            "ckay",
            "fireboy dml",
            "rema",
            "tiwa savage",
            "black coffee",
            "amaarae",
            "black sherif",
            "omah lay",
            "joeboy",
            "ayra starr",
            "asake",
            "diamond platnumz",
            "fally ipupa",
            "angelique kidjo",
            "nasty c",
            "sarkodie",
        ],
        Genre::Latin => &[
            "bad bunny",
            "j balvin",
            "karol g",
            "ozuna",
            "rauw alejandro",
            "daddy yankee",
            "maluma",
            "anuel aa",
            "becky g",
            "rosalia",
            "nicky jam",
            "farruko",
            "sech",
            "myke towers",
            "jhay cortez",
            "luis fonsi",
            "shakira",
            "sebastian yatra",
            "camilo",
            "natti natasha",
        ],
    }
}
