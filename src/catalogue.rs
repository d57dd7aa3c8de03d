//! Release catalogue: the published dataset files and their study regions.
//!
//! The liveability release ships 14 CSV files under one DOI and licence, and
//! covers 21 study regions (Australian capital and major regional cities),
//! each described by a CRS84 bounding polygon. The catalogue renders the
//! `datasets` and `locations` blocks of the release metadata as YAML or JSON.
//!
//! ```rust
//! use accessr::catalogue;
//!
//! let region = catalogue::locate(144.9631, -37.8136).unwrap();
//! assert_eq!(region.name, "Melbourne");
//! assert_eq!(catalogue::datasets().len(), 14);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// DOI shared by every file in the release.
pub const RELEASE_DOI: &str = "https://doi.org/10.25439/rmt.15001230";

/// Licence shared by every file in the release.
pub const RELEASE_LICENCE: &str = "ODbL";

/// Period the indicators describe.
pub const TIMEPOINT: &str = "[2018:2019]";

const DATASETS: [(&str, &str); 14] = [
    (
        "hlc_ntnl_liveability_2018_address_points_indicators_epsg7845.csv",
        "Liveability indicators for residential locations (address points in urban Mesh Blocks with dwellings at 2016 census)",
    ),
    (
        "hlc_ntnl_liveability_2018_address_points_distance_closest_epsg7845.csv",
        "Estimates for distance in metres along pedestrian network to the closest of a range of destination types for residential locations (address points in urban Mesh Blocks with dwellings at 2016 census)",
    ),
    (
        "hlc_ntnl_liveability_2018_address_points_distance_arrays.csv",
        "Arrays of estimates for distance in metres along pedestrian network to all destinations (within 3200m and the closest) across a range of destination types , for residential locations (address points in urban Mesh Blocks with dwellings at 2016 census)",
    ),
    (
        "hlc_ntnl_liveability_2018_Mesh_Block_2016.csv",
        "Mesh Block averages of residential liveability indicators and distance to closest estimates, with dwelling and person counts as well as area linkage codes to support aggregation to larger area scales (optionally with weighting; recommended)",
    ),
    (
        "hlc_ntnl_liveability_2018_sa1_2016.csv",
        "Liveability indicators for dwellings, aggregated for Statistical Areas Level 1 (SA1)",
    ),
    (
        "hlc_ntnl_liveability_2018_sa2_2016.csv",
        "Liveability indicators for dwellings, aggregated for Statistical Areas Level 2 (SA2)",
    ),
    (
        "hlc_ntnl_liveability_2018_sa3_2016.csv",
        "Liveability indicators for dwellings, aggregated for Statistical Areas Level 3 (SA3)",
    ),
    (
        "hlc_ntnl_liveability_2018_sa4_2016.csv",
        "Liveability indicators for dwellings, aggregated for Statistical Areas Level 4 (SA4)",
    ),
    (
        "hlc_ntnl_liveability_2018_ssc_2016.csv",
        "Liveability indicators for dwellings, aggregated for Suburbs",
    ),
    (
        "hlc_ntnl_liveability_2018_lga_2016.csv",
        "Liveability indicators for dwellings, aggregated for Local Government Areas",
    ),
    (
        "hlc_ntnl_liveability_2018_region.csv",
        "Liveability indicators for dwellings, aggregated for cities",
    ),
    (
        "hlc_ntnl_liveability_2018_gtfs_20191008_20191205_daytime_tidy_transit_headway_analysis.csv",
        "GTFS transport stops headway analysis of day time weekday public transport service frequency between 8 October 2019 to 5 December 2019, with WKT geometry",
    ),
    (
        "hlc_ntnl_liveability_2018_aos_public_osm.csv",
        "Areas of open space with at least partial public access, as identified using open street map, with WKT geometry for public geometry, water geometry and overall geometry as well as JSON attributes (including public area) and list of co-located amenities within 100m (including public toilets)",
    ),
    (
        "hlc_ntnl_liveability_2018_od_aos_jsonb.csv",
        "JSON list of identifiers and distances of areas of open space for residential address points identified as having areas of open space accessible within 3200m.  This dataset is indexed by the residential address point identifier, supporting linkage with attributes from the main address indicator dataset.",
    ),
];

// CRS84 (lon, lat) rings, closed, sorted by region name
const STUDY_REGIONS: [(&str, [[f64; 2]; 5]); 21] = [
    (
        "Adelaide",
        [
            [138.44598213716083, -35.349215154596855],
            [138.94637092369524, -35.33388656273774],
            [138.90902666332553, -34.55005481676975],
            [138.41240914001398, -34.56529928316498],
            [138.44598213716083, -35.349215154596855],
        ],
    ),
    (
        "Albury - Wodonga",
        [
            [146.82993553758618, -36.21943168457877],
            [147.04259086873486, -36.20162914079577],
            [147.01786973270742, -36.008843305099646],
            [146.80561182343283, -36.026622632755654],
            [146.82993553758618, -36.21943168457877],
        ],
    ),
    (
        "Ballarat",
        [
            [143.69663589135223, -37.67189340701294],
            [143.9361242759184, -37.6569921753805],
            [143.9172723082427, -37.46739898686607],
            [143.67823466145825, -37.482281993437724],
            [143.69663589135223, -37.67189340701294],
        ],
    ),
    (
        "Bendigo",
        [
            [144.19526564912172, -36.84765762258256],
            [144.40606210060162, -36.833739094903066],
            [144.386044455283, -36.63942261947314],
            [144.17564991128475, -36.653323219403916],
            [144.19526564912172, -36.84765762258256],
        ],
    ),
    (
        "Brisbane",
        [
            [152.46548737523543, -28.15652648768148],
            [153.4811382711439, -28.019494163101793],
            [153.2742730358054, -26.83188473977481],
            [152.26909093488365, -26.96751297372372],
            [152.46548737523543, -28.15652648768148],
        ],
    ),
    (
        "Cairns",
        [
            [145.68135750807213, -17.043954655944475],
            [145.7948428634317, -17.03372783009555],
            [145.76475826510955, -16.725612496181014],
            [145.6515590259542, -16.735804193173408],
            [145.68135750807213, -17.043954655944475],
        ],
    ),
    (
        "Canberra",
        [
            [149.0387969873978, -35.48646024057889],
            [149.25059893747226, -35.465479687841764],
            [149.20271750617383, -35.14311276340299],
            [148.991567760707, -35.16404641744238],
            [149.0387969873978, -35.48646024057889],
        ],
    ),
    (
        "Darwin",
        [
            [130.81338278318918, -12.52133932126639],
            [131.04786458710367, -12.526967023308314],
            [131.0522690525503, -12.342588570786084],
            [130.8181367976409, -12.336973612392775],
            [130.81338278318918, -12.52133932126639],
        ],
    ),
    (
        "Geelong",
        [
            [144.2684474388571, -38.36007583602345],
            [144.67470362360544, -38.33335526076835],
            [144.63769583691843, -37.989590064622035],
            [144.23283534347595, -38.01625260440825],
            [144.2684474388571, -38.36007583602345],
        ],
    ),
    (
        "Gold Coast - Tweed Heads",
        [
            [153.3042906839067, -28.451569690298943],
            [153.61162810359122, -28.409165450120337],
            [153.48165882488468, -27.673769813957964],
            [153.1762937962245, -27.71590856162429],
            [153.3042906839067, -28.451569690298943],
        ],
    ),
    (
        "Hobart",
        [
            [147.07309591375721, -43.09699391622893],
            [147.71183574330198, -43.04690111954347],
            [147.65170102519627, -42.64205403972385],
            [147.0157211828845, -42.6920390930534],
            [147.07309591375721, -43.09699391622893],
        ],
    ),
    (
        "Launceston",
        [
            [147.05398574761335, -41.51776919286061],
            [147.2167767540066, -41.50493286106136],
            [147.19154951501386, -41.32485462591983],
            [147.0290647336857, -41.33767795418625],
            [147.05398574761335, -41.51776919286061],
        ],
    ),
    (
        "Mackay",
        [
            [149.13918126413182, -21.198422491101343],
            [149.2426388640671, -21.186636706933758],
            [149.2175899592728, -20.99361006727908],
            [149.11429906979288, -21.005372789705532],
            [149.13918126413182, -21.198422491101343],
        ],
    ),
    (
        "Melbourne",
        [
            [144.48969406050185, -38.45799994064167],
            [145.79513423257504, -38.36669177162322],
            [145.65775557863682, -37.201643453543014],
            [144.36737212382764, -37.292273275965485],
            [144.48969406050185, -38.45799994064167],
        ],
    ),
    (
        "Newcastle - Maitland",
        [
            [151.3457159009476, -33.15583763942342],
            [151.8660185763883, -33.094099254175354],
            [151.7905150175444, -32.64798088993183],
            [151.2723545399701, -32.709513920149845],
            [151.3457159009476, -33.15583763942342],
        ],
    ),
    (
        "Perth",
        [
            [115.38075571409067, -32.64142346696732],
            [116.0860058287177, -32.72872881990614],
            [116.28011994847546, -31.57174466055225],
            [115.58229484116389, -31.485207469120727],
            [115.38075571409067, -32.64142346696732],
        ],
    ),
    (
        "Sunshine Coast",
        [
            [152.92950045008266, -26.871824016836527],
            [153.18970701729353, -26.836153400691],
            [153.10173261859975, -26.320961159120326],
            [152.84268263939072, -26.356469111090615],
            [152.92950045008266, -26.871824016836527],
        ],
    ),
    (
        "Sydney",
        [
            [150.37511463226642, -34.33002648914616],
            [151.76712511517286, -34.17203433001096],
            [151.59026349919736, -33.12753063008356],
            [150.21178559673473, -33.28432428583176],
            [150.37511463226642, -34.33002648914616],
        ],
    ),
    (
        "Toowoomba",
        [
            [151.85061894744888, -27.72255230051847],
            [152.01074700101822, -27.702080088118755],
            [151.95856168377566, -27.379255993500433],
            [151.79888504104667, -27.39967108573803],
            [151.85061894744888, -27.72255230051847],
        ],
    ),
    (
        "Townsville",
        [
            [146.597728947458, -19.4254651956833],
            [146.86882880010072, -19.399313462320524],
            [146.8437905355204, -19.16771860232492],
            [146.57321100583675, -19.19380634221397],
            [146.597728947458, -19.4254651956833],
        ],
    ),
    (
        "Wollongong",
        [
            [150.7386399760657, -34.70950196816913],
            [151.08067933441586, -34.67125648987749],
            [150.99847524859507, -34.17193011887917],
            [150.6580427682065, -34.21003963871241],
            [150.7386399760657, -34.70950196816913],
        ],
    ),
];

/// One published dataset file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// CSV file name.
    #[serde(rename = "dataset")]
    pub file: String,
    /// Release DOI.
    pub doi: String,
    /// Data licence.
    pub licence: String,
    /// What the file contains.
    pub role: String,
}

/// A study region and its bounding polygon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyRegion {
    /// Region name, e.g. `"Gold Coast - Tweed Heads"`.
    pub name: String,
    /// Closed CRS84 ring of `[lon, lat]` corners.
    pub bbox: [[f64; 2]; 5],
}

/// Axis-aligned bounds of a study region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Western edge (degrees longitude).
    pub min_lon: f64,
    /// Southern edge (degrees latitude).
    pub min_lat: f64,
    /// Eastern edge (degrees longitude).
    pub max_lon: f64,
    /// Northern edge (degrees latitude).
    pub max_lat: f64,
}

impl StudyRegion {
    /// Axis-aligned extent of the (slightly rotated) bounding polygon.
    pub fn extent(&self) -> Extent {
        self.bbox.iter().fold(
            Extent {
                min_lon: f64::INFINITY,
                min_lat: f64::INFINITY,
                max_lon: f64::NEG_INFINITY,
                max_lat: f64::NEG_INFINITY,
            },
            |e, &[lon, lat]| Extent {
                min_lon: e.min_lon.min(lon),
                min_lat: e.min_lat.min(lat),
                max_lon: e.max_lon.max(lon),
                max_lat: e.max_lat.max(lat),
            },
        )
    }

    /// Mean of the four distinct corners, as `(lon, lat)`.
    pub fn centroid(&self) -> (f64, f64) {
        let corners = &self.bbox[..4];
        let (lon, lat) = corners
            .iter()
            .fold((0.0, 0.0), |(x, y), &[lon, lat]| (x + lon, y + lat));
        (lon / 4.0, lat / 4.0)
    }

    /// Whether a CRS84 point falls inside the bounding polygon (even-odd rule).
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        let mut inside = false;
        for edge in self.bbox.windows(2) {
            let [x1, y1] = edge[0];
            let [x2, y2] = edge[1];
            if (y1 > lat) != (y2 > lat) && lon < (x2 - x1) * (lat - y1) / (y2 - y1) + x1 {
                inside = !inside;
            }
        }
        inside
    }
}

/// Every dataset file in the release, in publication order.
pub fn datasets() -> Vec<Dataset> {
    DATASETS
        .iter()
        .map(|&(file, role)| Dataset {
            file: file.to_owned(),
            doi: RELEASE_DOI.to_owned(),
            licence: RELEASE_LICENCE.to_owned(),
            role: role.to_owned(),
        })
        .collect()
}

/// Look up a dataset by file name.
pub fn dataset(file: &str) -> Option<Dataset> {
    datasets().into_iter().find(|d| d.file == file)
}

/// Every study region, sorted by name.
pub fn study_regions() -> Vec<StudyRegion> {
    STUDY_REGIONS
        .iter()
        .map(|&(name, bbox)| StudyRegion {
            name: name.to_owned(),
            bbox,
        })
        .collect()
}

/// Look up a study region by name.
pub fn study_region(name: &str) -> Option<StudyRegion> {
    study_regions().into_iter().find(|r| r.name == name)
}

/// The study region containing a CRS84 point, if any.
pub fn locate(lon: f64, lat: f64) -> Option<StudyRegion> {
    study_regions().into_iter().find(|r| r.contains(lon, lat))
}

#[derive(Serialize)]
struct MetadataDoc {
    datasets: Vec<Dataset>,
    locations: Vec<LocationEntry>,
}

#[derive(Serialize)]
struct LocationEntry {
    region: String,
    bbox: [[f64; 2]; 5],
    timepoint: &'static str,
}

fn metadata_doc() -> MetadataDoc {
    MetadataDoc {
        datasets: datasets(),
        locations: study_regions()
            .into_iter()
            .map(|r| LocationEntry {
                region: format!("{}, Australia", r.name),
                bbox: r.bbox,
                timepoint: TIMEPOINT,
            })
            .collect(),
    }
}

/// Release metadata (`datasets` and `locations`) as YAML.
pub fn metadata_yaml() -> Result<String> {
    Ok(serde_yaml::to_string(&metadata_doc())?)
}

/// Release metadata (`datasets` and `locations`) as pretty-printed JSON.
pub fn metadata_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&metadata_doc())?)
}
