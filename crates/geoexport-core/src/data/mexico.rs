// crates/geoexport-core/src/data/mexico.rs

//! Detailed Mexico table: all 32 federal entities with their INEGI codes and
//! the principal cities of each (top 5-10 by population).

use crate::raw::{CountryTable, PrincipalCities, RegionEntry};

pub const MEXICO: CountryTable<'static> = CountryTable {
    name: "Mexico",
    code: "MX",
    regions: STATES,
    principal_cities: PRINCIPAL_CITIES,
};

const STATES: &[RegionEntry<'static>] = &[
    RegionEntry::coded("01", "Aguascalientes"),
    RegionEntry::coded("02", "Baja California"),
    RegionEntry::coded("03", "Baja California Sur"),
    RegionEntry::coded("04", "Campeche"),
    RegionEntry::coded("05", "Coahuila"),
    RegionEntry::coded("06", "Colima"),
    RegionEntry::coded("07", "Chiapas"),
    RegionEntry::coded("08", "Chihuahua"),
    RegionEntry::coded("09", "Ciudad de México"),
    RegionEntry::coded("10", "Durango"),
    RegionEntry::coded("11", "Guanajuato"),
    RegionEntry::coded("12", "Guerrero"),
    RegionEntry::coded("13", "Hidalgo"),
    RegionEntry::coded("14", "Jalisco"),
    RegionEntry::coded("15", "México"),
    RegionEntry::coded("16", "Michoacán"),
    RegionEntry::coded("17", "Morelos"),
    RegionEntry::coded("18", "Nayarit"),
    RegionEntry::coded("19", "Nuevo León"),
    RegionEntry::coded("20", "Oaxaca"),
    RegionEntry::coded("21", "Puebla"),
    RegionEntry::coded("22", "Querétaro"),
    RegionEntry::coded("23", "Quintana Roo"),
    RegionEntry::coded("24", "San Luis Potosí"),
    RegionEntry::coded("25", "Sinaloa"),
    RegionEntry::coded("26", "Sonora"),
    RegionEntry::coded("27", "Tabasco"),
    RegionEntry::coded("28", "Tamaulipas"),
    RegionEntry::coded("29", "Tlaxcala"),
    RegionEntry::coded("30", "Veracruz"),
    RegionEntry::coded("31", "Yucatán"),
    RegionEntry::coded("32", "Zacatecas"),
];

const PRINCIPAL_CITIES: &[PrincipalCities<'static>] = &[
    ("Aguascalientes", &["Aguascalientes", "Jesús María", "Calvillo", "Rincón de Romos", "Pabellón de Arteaga"]),
    ("Baja California", &["Tijuana", "Mexicali", "Ensenada", "Playas de Rosarito", "Tecate"]),
    ("Baja California Sur", &["La Paz", "Los Cabos", "San José del Cabo", "Cabo San Lucas", "Ciudad Constitución"]),
    ("Campeche", &["Campeche", "Ciudad del Carmen", "Champotón", "Escárcega", "Calkiní"]),
    ("Coahuila", &["Saltillo", "Torreón", "Monclova", "Piedras Negras", "Acuña", "Ramos Arizpe"]),
    ("Colima", &["Colima", "Manzanillo", "Tecomán", "Villa de Álvarez", "Armería"]),
    ("Chiapas", &["Tuxtla Gutiérrez", "Tapachula", "San Cristóbal de las Casas", "Comitán", "Palenque", "Ocosingo"]),
    ("Chihuahua", &["Chihuahua", "Ciudad Juárez", "Cuauhtémoc", "Delicias", "Parral", "Nuevo Casas Grandes"]),
    ("Ciudad de México", &["Iztapalapa", "Gustavo A. Madero", "Álvaro Obregón", "Tlalpan", "Coyoacán", "Cuauhtémoc", "Miguel Hidalgo", "Benito Juárez", "Xochimilco", "Iztacalco"]),
    ("Durango", &["Durango", "Gómez Palacio", "Lerdo", "Santiago Papasquiaro", "Guadalupe Victoria"]),
    ("Guanajuato", &["León", "Irapuato", "Celaya", "Salamanca", "Guanajuato", "San Miguel de Allende", "Silao", "Pénjamo", "Dolores Hidalgo"]),
    ("Guerrero", &["Acapulco", "Chilpancingo", "Iguala", "Zihuatanejo", "Taxco", "Chilapa"]),
    ("Hidalgo", &["Pachuca", "Tulancingo", "Tizayuca", "Tepeji del Río", "Tula de Allende"]),
    ("Jalisco", &["Guadalajara", "Zapopan", "Tlaquepaque", "Tonalá", "Tlajomulco", "Puerto Vallarta", "Lagos de Moreno", "Tepatitlán"]),
    ("México", &["Ecatepec", "Nezahualcóyotl", "Naucalpan", "Tlalnepantla", "Toluca", "Chimalhuacán", "Atizapán de Zaragoza", "Cuautitlán Izcalli", "Ixtapaluca", "Texcoco"]),
    ("Michoacán", &["Morelia", "Uruapan", "Zamora", "Lázaro Cárdenas", "Apatzingán", "Pátzcuaro"]),
    ("Morelos", &["Cuernavaca", "Jiutepec", "Cuautla", "Temixco", "Yautepec"]),
    ("Nayarit", &["Tepic", "Bahía de Banderas", "Santiago Ixcuintla", "Compostela", "Tuxpan"]),
    ("Nuevo León", &["Monterrey", "Guadalupe", "San Nicolás de los Garza", "Apodaca", "San Pedro Garza García", "General Escobedo", "Santa Catarina", "García"]),
    ("Oaxaca", &["Oaxaca de Juárez", "Salina Cruz", "Juchitán", "Tuxtepec", "Huajuapan de León", "Puerto Escondido"]),
    ("Puebla", &["Puebla", "Tehuacán", "San Martín Texmelucan", "Atlixco", "Cholula", "Teziutlán"]),
    ("Querétaro", &["Querétaro", "San Juan del Río", "Corregidora", "El Marqués", "Tequisquiapan"]),
    ("Quintana Roo", &["Cancún", "Playa del Carmen", "Chetumal", "Cozumel", "Tulum", "Isla Mujeres"]),
    ("San Luis Potosí", &["San Luis Potosí", "Soledad de Graciano Sánchez", "Ciudad Valles", "Matehuala", "Rioverde"]),
    ("Sinaloa", &["Culiacán", "Mazatlán", "Los Mochis", "Guasave", "Guamúchil"]),
    ("Sonora", &["Hermosillo", "Ciudad Obregón", "Nogales", "San Luis Río Colorado", "Navojoa", "Guaymas"]),
    ("Tabasco", &["Villahermosa", "Cárdenas", "Comalcalco", "Huimanguillo", "Macuspana"]),
    ("Tamaulipas", &["Reynosa", "Matamoros", "Nuevo Laredo", "Tampico", "Ciudad Victoria", "Ciudad Madero"]),
    ("Tlaxcala", &["Tlaxcala", "Apizaco", "Huamantla", "San Pablo del Monte", "Chiautempan"]),
    ("Veracruz", &["Veracruz", "Xalapa", "Coatzacoalcos", "Poza Rica", "Córdoba", "Orizaba", "Minatitlán", "Tuxpan"]),
    ("Yucatán", &["Mérida", "Kanasín", "Valladolid", "Tizimín", "Progreso", "Umán"]),
    ("Zacatecas", &["Zacatecas", "Fresnillo", "Guadalupe", "Río Grande", "Sombrerete"]),
];
