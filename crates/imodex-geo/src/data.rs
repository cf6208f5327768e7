//! Built-in parish seed table.
//!
//! The table order is load-bearing: fuzzy lookups return the first matching
//! entry, so simple parish names are registered before the post-2013 compound
//! union parishes that contain them. Append new entries at the end of their
//! district block unless a tie-break is intended.

use imodex_core::Coordinates;

use crate::gazetteer::GazetteerEntry;

/// (normalized key, municipality, district, lat, lng)
const BUILTIN: &[(&str, &str, &str, f64, f64)] = &[
    // Porto
    ("porto", "Porto", "Porto", 41.1579, -8.6291),
    ("cedofeita", "Porto", "Porto", 41.1523, -8.6254),
    ("paranhos", "Porto", "Porto", 41.1726, -8.6094),
    ("ramalde", "Porto", "Porto", 41.1678, -8.6493),
    ("bonfim", "Porto", "Porto", 41.1489, -8.5941),
    ("campanha", "Porto", "Porto", 41.1504, -8.5783),
    ("lordelo do ouro", "Porto", "Porto", 41.1529, -8.6587),
    ("massarelos", "Porto", "Porto", 41.1496, -8.6376),
    ("foz do douro", "Porto", "Porto", 41.1519, -8.6761),
    ("aldoar", "Porto", "Porto", 41.1686, -8.6708),
    ("nevogilde", "Porto", "Porto", 41.1603, -8.6801),
    (
        "cedofeita santo ildefonso se miragaia sao nicolau e vitoria",
        "Porto",
        "Porto",
        41.1466,
        -8.6176,
    ),
    ("matosinhos", "Matosinhos", "Porto", 41.1821, -8.6890),
    ("leca da palmeira", "Matosinhos", "Porto", 41.1935, -8.7004),
    ("vila nova de gaia", "Vila Nova de Gaia", "Porto", 41.1333, -8.6176),
    ("mafamude", "Vila Nova de Gaia", "Porto", 41.1217, -8.6099),
    ("canidelo", "Vila Nova de Gaia", "Porto", 41.1258, -8.6443),
    ("gondomar", "Gondomar", "Porto", 41.1423, -8.5321),
    ("maia", "Maia", "Porto", 41.2357, -8.6199),
    ("valongo", "Valongo", "Porto", 41.1889, -8.4986),
    ("povoa de varzim", "Póvoa de Varzim", "Porto", 41.3834, -8.7635),
    ("vila do conde", "Vila do Conde", "Porto", 41.3517, -8.7479),
    ("penafiel", "Penafiel", "Porto", 41.2082, -8.2828),
    // Lisboa
    ("lisboa", "Lisboa", "Lisboa", 38.7223, -9.1393),
    ("alvalade", "Lisboa", "Lisboa", 38.7536, -9.1443),
    ("benfica", "Lisboa", "Lisboa", 38.7503, -9.2033),
    ("marvila", "Lisboa", "Lisboa", 38.7440, -9.1033),
    ("alcantara", "Lisboa", "Lisboa", 38.7046, -9.1740),
    ("belem", "Lisboa", "Lisboa", 38.6976, -9.2063),
    ("parque das nacoes", "Lisboa", "Lisboa", 38.7633, -9.0950),
    ("arroios", "Lisboa", "Lisboa", 38.7330, -9.1341),
    ("campo de ourique", "Lisboa", "Lisboa", 38.7154, -9.1665),
    ("estrela", "Lisboa", "Lisboa", 38.7130, -9.1601),
    ("lumiar", "Lisboa", "Lisboa", 38.7726, -9.1601),
    ("olivais", "Lisboa", "Lisboa", 38.7691, -9.1106),
    ("areeiro", "Lisboa", "Lisboa", 38.7423, -9.1335),
    ("ajuda", "Lisboa", "Lisboa", 38.7077, -9.2009),
    ("carnide", "Lisboa", "Lisboa", 38.7624, -9.1888),
    ("penha de franca", "Lisboa", "Lisboa", 38.7279, -9.1245),
    ("santa maria maior", "Lisboa", "Lisboa", 38.7100, -9.1335),
    ("misericordia", "Lisboa", "Lisboa", 38.7110, -9.1460),
    ("sao vicente", "Lisboa", "Lisboa", 38.7168, -9.1246),
    ("santo antonio", "Lisboa", "Lisboa", 38.7220, -9.1469),
    ("avenidas novas", "Lisboa", "Lisboa", 38.7433, -9.1499),
    ("campolide", "Lisboa", "Lisboa", 38.7306, -9.1655),
    ("beato", "Lisboa", "Lisboa", 38.7332, -9.1086),
    ("santa clara", "Lisboa", "Lisboa", 38.7835, -9.1446),
    ("amadora", "Amadora", "Lisboa", 38.7538, -9.2308),
    ("oeiras", "Oeiras", "Lisboa", 38.6920, -9.3106),
    ("cascais", "Cascais", "Lisboa", 38.6979, -9.4215),
    ("estoril", "Cascais", "Lisboa", 38.7057, -9.3977),
    ("sintra", "Sintra", "Lisboa", 38.8029, -9.3817),
    ("queluz", "Sintra", "Lisboa", 38.7566, -9.2546),
    ("odivelas", "Odivelas", "Lisboa", 38.7920, -9.1838),
    ("loures", "Loures", "Lisboa", 38.8309, -9.1686),
    ("mafra", "Mafra", "Lisboa", 38.9370, -9.3273),
    ("torres vedras", "Torres Vedras", "Lisboa", 39.0910, -9.2588),
    ("vila franca de xira", "Vila Franca de Xira", "Lisboa", 38.9552, -8.9893),
    // Setúbal
    ("setubal", "Setúbal", "Setúbal", 38.5244, -8.8882),
    ("almada", "Almada", "Setúbal", 38.6803, -9.1583),
    ("costa da caparica", "Almada", "Setúbal", 38.6444, -9.2354),
    ("barreiro", "Barreiro", "Setúbal", 38.6633, -9.0724),
    ("seixal", "Seixal", "Setúbal", 38.6404, -9.1016),
    ("montijo", "Montijo", "Setúbal", 38.7067, -8.9738),
    ("sesimbra", "Sesimbra", "Setúbal", 38.4445, -9.1015),
    // Braga
    ("braga", "Braga", "Braga", 41.5454, -8.4265),
    ("guimaraes", "Guimarães", "Braga", 41.4425, -8.2918),
    ("barcelos", "Barcelos", "Braga", 41.5388, -8.6151),
    ("vila nova de famalicao", "Vila Nova de Famalicão", "Braga", 41.4080, -8.5201),
    ("esposende", "Esposende", "Braga", 41.5320, -8.7829),
    // Aveiro
    ("aveiro", "Aveiro", "Aveiro", 40.6405, -8.6538),
    ("gloria e vera cruz", "Aveiro", "Aveiro", 40.6412, -8.6536),
    ("agueda", "Águeda", "Aveiro", 40.5747, -8.4480),
    ("ovar", "Ovar", "Aveiro", 40.8593, -8.6260),
    ("espinho", "Espinho", "Aveiro", 41.0072, -8.6410),
    ("sao joao da madeira", "São João da Madeira", "Aveiro", 40.9009, -8.4903),
    // Coimbra
    ("coimbra", "Coimbra", "Coimbra", 40.2033, -8.4103),
    ("se nova", "Coimbra", "Coimbra", 40.2056, -8.4196),
    ("santo antonio dos olivais", "Coimbra", "Coimbra", 40.2131, -8.3983),
    ("figueira da foz", "Figueira da Foz", "Coimbra", 40.1508, -8.8618),
    // Leiria
    ("leiria", "Leiria", "Leiria", 39.7436, -8.8071),
    ("caldas da rainha", "Caldas da Rainha", "Leiria", 39.4031, -9.1354),
    ("marinha grande", "Marinha Grande", "Leiria", 39.7476, -8.9320),
    ("nazare", "Nazaré", "Leiria", 39.6012, -9.0700),
    ("peniche", "Peniche", "Leiria", 39.3558, -9.3811),
    ("obidos", "Óbidos", "Leiria", 39.3603, -9.1567),
    // Santarém
    ("santarem", "Santarém", "Santarém", 39.2362, -8.6868),
    ("tomar", "Tomar", "Santarém", 39.6029, -8.4135),
    ("abrantes", "Abrantes", "Santarém", 39.4633, -8.1971),
    ("entroncamento", "Entroncamento", "Santarém", 39.4653, -8.4689),
    // Faro
    ("faro", "Faro", "Faro", 37.0194, -7.9304),
    ("albufeira", "Albufeira", "Faro", 37.0891, -8.2479),
    ("portimao", "Portimão", "Faro", 37.1366, -8.5377),
    ("lagos", "Lagos", "Faro", 37.1028, -8.6742),
    ("loule", "Loulé", "Faro", 37.1377, -8.0201),
    ("quarteira", "Loulé", "Faro", 37.0695, -8.1007),
    ("tavira", "Tavira", "Faro", 37.1274, -7.6486),
    ("olhao", "Olhão", "Faro", 37.0262, -7.8412),
    ("lagoa", "Lagoa", "Faro", 37.1350, -8.4534),
    ("vila real de santo antonio", "Vila Real de Santo António", "Faro", 37.1939, -7.4172),
    // Évora / Beja / Portalegre
    ("evora", "Évora", "Évora", 38.5710, -7.9135),
    ("estremoz", "Estremoz", "Évora", 38.8432, -7.5862),
    ("beja", "Beja", "Beja", 38.0151, -7.8632),
    ("portalegre", "Portalegre", "Portalegre", 39.2967, -7.4281),
    ("elvas", "Elvas", "Portalegre", 38.8814, -7.1628),
    // Interior norte e centro
    ("viseu", "Viseu", "Viseu", 40.6566, -7.9124),
    ("lamego", "Lamego", "Viseu", 41.0970, -7.8090),
    ("guarda", "Guarda", "Guarda", 40.5373, -7.2676),
    ("castelo branco", "Castelo Branco", "Castelo Branco", 39.8222, -7.4918),
    ("covilha", "Covilhã", "Castelo Branco", 40.2805, -7.5041),
    ("fundao", "Fundão", "Castelo Branco", 40.1396, -7.5010),
    ("braganca", "Bragança", "Bragança", 41.8061, -6.7589),
    ("mirandela", "Mirandela", "Bragança", 41.4854, -7.1864),
    ("vila real", "Vila Real", "Vila Real", 41.3006, -7.7441),
    ("chaves", "Chaves", "Vila Real", 41.7404, -7.4713),
    ("viana do castelo", "Viana do Castelo", "Viana do Castelo", 41.6946, -8.8362),
    ("ponte de lima", "Ponte de Lima", "Viana do Castelo", 41.7675, -8.5836),
    // Ilhas
    ("funchal", "Funchal", "Madeira", 32.6669, -16.9241),
    ("ponta delgada", "Ponta Delgada", "Açores", 37.7394, -25.6687),
];

pub(crate) fn builtin_entries() -> Vec<GazetteerEntry> {
    BUILTIN
        .iter()
        .map(|&(key, municipality, district, lat, lng)| GazetteerEntry {
            key: key.to_owned(),
            municipality: municipality.to_owned(),
            district: district.to_owned(),
            coordinates: Coordinates { lat, lng },
        })
        .collect()
}
