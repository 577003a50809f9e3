// crates/geoexport-core/src/data/global.rs

//! Global table: a handful of countries with their top regions, plus the
//! abbreviated Mexico table appended last.

use crate::raw::{CountryTable, PrincipalCities, RegionEntry};

pub const GLOBAL: &[CountryTable<'static>] = &[
    USA, CANADA, BRAZIL, SPAIN, GERMANY, JAPAN, MEXICO_ABBREVIATED,
];

const USA: CountryTable<'static> = CountryTable {
    name: "USA",
    code: "US",
    regions: &[
        RegionEntry::new("California"),
        RegionEntry::new("New York"),
        RegionEntry::new("Texas"),
        RegionEntry::new("Florida"),
    ],
    principal_cities: &[
        ("California", &["Los Angeles", "San Francisco", "San Diego", "San Jose", "Sacramento"]),
        ("New York", &["New York City", "Buffalo", "Rochester", "Yonkers", "Syracuse"]),
        ("Texas", &["Houston", "San Antonio", "Dallas", "Austin", "Fort Worth"]),
        ("Florida", &["Miami", "Tampa", "Orlando", "Jacksonville", "Tallahassee"]),
    ],
};

const CANADA: CountryTable<'static> = CountryTable {
    name: "Canada",
    code: "CA",
    regions: &[
        RegionEntry::new("Ontario"),
        RegionEntry::new("Quebec"),
        RegionEntry::new("British Columbia"),
    ],
    principal_cities: &[
        ("Ontario", &["Toronto", "Ottawa", "Mississauga", "Brampton", "Hamilton"]),
        ("Quebec", &["Montreal", "Quebec City", "Laval", "Gatineau", "Longueuil"]),
        ("British Columbia", &["Vancouver", "Victoria", "Surrey", "Burnaby", "Richmond"]),
    ],
};

const BRAZIL: CountryTable<'static> = CountryTable {
    name: "Brazil",
    code: "BR",
    regions: &[
        RegionEntry::new("São Paulo"),
        RegionEntry::new("Rio de Janeiro"),
        RegionEntry::new("Minas Gerais"),
    ],
    principal_cities: &[
        ("São Paulo", &["São Paulo", "Guarulhos", "Campinas", "São Bernardo do Campo", "Santo André"]),
        ("Rio de Janeiro", &["Rio de Janeiro", "São Gonçalo", "Duque de Caxias", "Nova Iguaçu", "Niterói"]),
        ("Minas Gerais", &["Belo Horizonte", "Uberlândia", "Contagem", "Juiz de Fora", "Betim"]),
    ],
};

const SPAIN: CountryTable<'static> = CountryTable {
    name: "Spain",
    code: "ES",
    regions: &[
        RegionEntry::new("Madrid"),
        RegionEntry::new("Catalonia"),
        RegionEntry::new("Andalusia"),
    ],
    principal_cities: &[
        ("Madrid", &["Madrid", "Móstoles", "Alcalá de Henares", "Fuenlabrada", "Leganés"]),
        ("Catalonia", &["Barcelona", "L'Hospitalet de Llobregat", "Badalona", "Terrassa", "Sabadell"]),
        ("Andalusia", &["Seville", "Málaga", "Córdoba", "Granada", "Jerez de la Frontera"]),
    ],
};

const GERMANY: CountryTable<'static> = CountryTable {
    name: "Germany",
    code: "DE",
    regions: &[
        RegionEntry::new("Bavaria"),
        RegionEntry::new("Berlin"),
        RegionEntry::new("Hamburg"),
    ],
    principal_cities: &[
        ("Bavaria", &["Munich", "Nuremberg", "Augsburg", "Regensburg", "Ingolstadt"]),
        ("Berlin", &["Berlin"]),
        ("Hamburg", &["Hamburg"]),
    ],
};

const JAPAN: CountryTable<'static> = CountryTable {
    name: "Japan",
    code: "JP",
    regions: &[RegionEntry::new("Tokyo"), RegionEntry::new("Osaka")],
    principal_cities: &[
        ("Tokyo", &["Tokyo", "Hachioji", "Machida", "Fuchu", "Chofu"]),
        ("Osaka", &["Osaka", "Sakai", "Higashiosaka", "Hirakata", "Toyonaka"]),
    ],
};

// Kept separate from the detailed `data::mexico` table; the two are distinct
// dataset variants.
const MEXICO_ABBREVIATED: CountryTable<'static> = CountryTable {
    name: "Mexico",
    code: "MX",
    regions: &[
        RegionEntry::new("Ciudad de México"),
        RegionEntry::new("Jalisco"),
        RegionEntry::new("Nuevo León"),
        RegionEntry::new("Baja California"),
    ],
    principal_cities: ABBREVIATED_MEXICO_CITIES,
};

const ABBREVIATED_MEXICO_CITIES: &[PrincipalCities<'static>] = &[
    ("Ciudad de México", &["Iztapalapa", "Gustavo A. Madero", "Álvaro Obregón", "Tlalpan", "Coyoacán"]),
    ("Jalisco", &["Guadalajara", "Zapopan", "Tlaquepaque", "Tonalá", "Tlajomulco"]),
    ("Nuevo León", &["Monterrey", "Guadalupe", "San Nicolás de los Garza", "Apodaca", "San Pedro Garza García"]),
    ("Baja California", &["Tijuana", "Mexicali", "Ensenada", "Playas de Rosarito", "Tecate"]),
];
