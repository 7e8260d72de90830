//! Team-name alias table.
//!
//! Keys are lowercase raw spellings seen on provider pages; values are the
//! canonical names used by the Warren Nolan roster. Edit this table to fix
//! reconciliation misses; no logic change is needed.
//!
//! Canonical names come from Warren Nolan ("Iowa State", "Connecticut",
//! "Saint Mary's College"). NCAA.com abbreviates ("Iowa St.", "N. Iowa"),
//! ESPN uses short display names ("UConn", "Pitt").

pub(super) const TEAM_ALIASES: &[(&str, &str)] = &[
    // NCAA.com "St." abbreviations
    ("iowa st.", "Iowa State"),
    ("michigan st.", "Michigan State"),
    ("ohio st.", "Ohio State"),
    ("utah st.", "Utah State"),
    ("san diego st.", "San Diego State"),
    ("arizona st.", "Arizona State"),
    ("okla. st.", "Oklahoma State"),
    ("oklahoma st.", "Oklahoma State"),
    ("florida st.", "Florida State"),
    ("colo. st.", "Colorado State"),
    ("colorado st.", "Colorado State"),
    ("ill. st.", "Illinois State"),
    ("illinois st.", "Illinois State"),
    ("kansas st.", "Kansas State"),
    ("sam houston st.", "Sam Houston State"),
    ("washington st.", "Washington State"),
    ("penn st.", "Penn State"),
    ("portland st.", "Portland State"),
    ("montana st.", "Montana State"),
    ("ark. st.", "Arkansas State"),
    ("arkansas st.", "Arkansas State"),
    ("s. dakota st.", "South Dakota State"),
    ("south dakota st.", "South Dakota State"),
    ("idaho st.", "Idaho State"),
    ("indiana st.", "Indiana State"),
    ("missouri st.", "Missouri State"),
    ("n. dakota st.", "North Dakota State"),
    ("north dakota st.", "North Dakota State"),
    ("murray st.", "Murray State"),
    ("kent st.", "Kent State"),
    ("fresno st.", "Fresno State"),
    ("boise st.", "Boise State"),
    ("wichita st.", "Wichita State"),
    ("wright st.", "Wright State"),
    ("youngstown st.", "Youngstown State"),
    ("weber st.", "Weber State"),
    ("tarleton st.", "Tarleton State"),
    ("mississippi st.", "Mississippi State"),
    ("delaware st.", "Delaware State"),
    ("norfolk st.", "Norfolk State"),
    ("chicago st.", "Chicago State"),
    ("jackson st.", "Jackson State"),
    ("morgan st.", "Morgan State"),
    ("coppin st.", "Coppin State"),
    ("alabama st.", "Alabama State"),
    ("kennesaw st.", "Kennesaw State"),
    ("georgia st.", "Georgia State"),
    ("northwest. st.", "Northwestern State"),
    ("northwestern st.", "Northwestern State"),
    ("oregon st.", "Oregon State"),
    ("new mexico st.", "New Mexico State"),
    ("n.m. state", "New Mexico State"),
    ("n.m. st.", "New Mexico State"),
    ("tennessee st.", "Tennessee State"),
    ("tenn. state", "Tennessee State"),
    ("tenn. st.", "Tennessee State"),
    ("morehead st.", "Morehead State"),
    ("jacksonville st.", "Jacksonville State"),
    ("cleveland st.", "Cleveland State"),
    ("ball st.", "Ball State"),
    ("sacramento st.", "Sacramento State"),
    ("long beach st.", "Long Beach State"),
    ("alcorn st.", "Alcorn State"),
    // Other NCAA.com abbreviations
    ("uconn", "Connecticut"),
    ("uni", "Northern Iowa"),
    ("n. iowa", "Northern Iowa"),
    ("n. texas", "North Texas"),
    ("n. carolina a&t", "North Carolina A&T"),
    ("n.c. a&t", "North Carolina A&T"),
    ("n. carolina central", "North Carolina Central"),
    ("s. florida", "South Florida"),
    ("usf", "South Florida"),
    ("n. kentucky", "Northern Kentucky"),
    ("n. illinois", "Northern Illinois"),
    ("n. arizona", "Northern Arizona"),
    ("n. colorado", "Northern Colorado"),
    ("northern colo.", "Northern Colorado"),
    ("se. louisiana", "Southeastern Louisiana"),
    ("s.e. louisiana", "Southeastern Louisiana"),
    ("e. kentucky", "Eastern Kentucky"),
    ("e. michigan", "Eastern Michigan"),
    ("e. illinois", "Eastern Illinois"),
    ("e. washington", "Eastern Washington"),
    ("w. michigan", "Western Michigan"),
    ("w. illinois", "Western Illinois"),
    ("w. carolina", "Western Carolina"),
    ("w. georgia", "West Georgia"),
    ("w. kentucky", "Western Kentucky"),
    ("western ky.", "Western Kentucky"),
    ("wku", "Western Kentucky"),
    ("s. illinois", "Southern Illinois"),
    ("so. illinois", "Southern Illinois"),
    ("southern ill.", "Southern Illinois"),
    ("md.-e. shore", "Maryland Eastern Shore"),
    ("maryland-eastern shore", "Maryland Eastern Shore"),
    ("ark.-pine bluff", "Arkansas-Pine Bluff"),
    ("central ark.", "Central Arkansas"),
    ("cent. arkansas", "Central Arkansas"),
    ("central conn. st.", "Central Connecticut"),
    ("central conn.", "Central Connecticut"),
    ("loyola-md.", "Loyola-Maryland"),
    ("loyola-md", "Loyola-Maryland"),
    ("loyola (md)", "Loyola-Maryland"),
    ("loyola maryland", "Loyola-Maryland"),
    ("loyola (il)", "Loyola-Chicago"),
    ("loyola marymount", "Loyola-Marymount"),
    ("lmu", "Loyola-Marymount"),
    ("iupui", "IU Indianapolis"),
    ("iu indy", "IU Indianapolis"),
    ("mount st. mary's", "Mount Saint Mary's"),
    ("mount st. marys", "Mount Saint Mary's"),
    ("seattle u", "Seattle University"),
    ("boston u", "Boston University"),
    ("etsu", "East Tennessee State"),
    ("e. tenn. st.", "East Tennessee State"),
    ("e. tennessee st.", "East Tennessee State"),
    ("east tenn. st.", "East Tennessee State"),
    ("tex. a&m-corpus christi", "Texas A&M-Corpus Christi"),
    ("a&m-corpus christi", "Texas A&M-Corpus Christi"),
    ("tamucc", "Texas A&M-Corpus Christi"),
    ("fla. atlantic", "FAU"),
    // Saint / St. variations
    ("st. john's", "Saint John's"),
    ("st john's", "Saint John's"),
    ("st. johns", "Saint John's"),
    ("st. john's (ny)", "Saint John's"),
    ("st. mary's", "Saint Mary's College"),
    ("saint mary's", "Saint Mary's College"),
    ("st. mary's (ca)", "Saint Mary's College"),
    ("saint mary's (ca)", "Saint Mary's College"),
    ("st. mary's college", "Saint Mary's College"),
    ("st. joseph's", "Saint Joseph's"),
    ("st. bonaventure", "Saint Bonaventure"),
    ("st. peter's", "Saint Peter's"),
    ("st. francis (pa)", "Saint Francis (PA)"),
    ("st. francis", "Saint Francis (PA)"),
    ("saint francis", "Saint Francis (PA)"),
    ("st. thomas", "Saint Thomas"),
    ("st thomas", "Saint Thomas"),
    ("st. thomas (mn)", "Saint Thomas"),
    ("saint thomas (mn)", "Saint Thomas"),
    ("st. thomas (minn.)", "Saint Thomas"),
    ("saint thomas (minn.)", "Saint Thomas"),
    // Miami disambiguation
    ("miami fl", "Miami (FL)"),
    ("miami florida", "Miami (FL)"),
    ("miami ohio", "Miami (OH)"),
    // Initialisms and long forms
    ("louisiana state", "LSU"),
    ("texas christian", "TCU"),
    ("southern methodist", "SMU"),
    ("nevada las vegas", "UNLV"),
    ("nevada-las vegas", "UNLV"),
    ("alabama-birmingham", "UAB"),
    ("texas-el paso", "UTEP"),
    ("texas-san antonio", "UTSA"),
    ("central florida", "UCF"),
    ("florida international", "FIU"),
    ("florida atlantic", "FAU"),
    ("unc", "North Carolina"),
    ("ucsb", "UC Santa Barbara"),
    ("virginia commonwealth", "VCU"),
    ("brigham young", "BYU"),
    ("mtsu", "Middle Tennessee"),
    ("middle tennessee state", "Middle Tennessee"),
    ("middle tenn.", "Middle Tennessee"),
    ("california polytechnic", "Cal Poly"),
    ("long island university", "Long Island"),
    ("liu", "Long Island"),
    ("n.c. state", "North Carolina State"),
    ("nc state", "North Carolina State"),
    ("pitt", "Pittsburgh"),
    ("prairie view", "Prairie View A&M"),
    ("grambling", "Grambling State"),
    ("app state", "Appalachian State"),
    ("ut martin", "Tennessee-Martin"),
    ("college of charleston", "Charleston"),
    ("col. of charleston", "Charleston"),
    ("detroit mercy", "Detroit"),
    ("umass", "UMass"),
    ("massachusetts", "UMass"),
    ("umass lowell", "UMass-Lowell"),
    ("ut arlington", "UTA"),
    ("texas-arlington", "UTA"),
    ("queens (nc)", "Queens"),
    ("ualbany", "Albany"),
    ("sam houston", "Sam Houston State"),
    ("lamar university", "Lamar"),
    ("southern mississippi", "Southern Miss"),
    ("army west point", "Army"),
    ("alcorn", "Alcorn State"),
    ("presbyterian", "Presbyterian College"),
    ("presbyterian col.", "Presbyterian College"),
    ("kansas city", "UMKC"),
    ("missouri-kansas city", "UMKC"),
    ("semo", "Southeast Missouri"),
    ("southeast missouri st.", "Southeast Missouri"),
    ("se. missouri st.", "Southeast Missouri"),
    ("s.e. missouri st.", "Southeast Missouri"),
    ("s.e. mo. st.", "Southeast Missouri"),
    ("se. mo. st.", "Southeast Missouri"),
    ("unc greensboro", "UNCG"),
    ("unc-greensboro", "UNCG"),
    ("unc wilmington", "UNCW"),
    ("sfa", "Stephen F. Austin"),
    ("csun", "Cal State Northridge"),
    ("cal st. northridge", "Cal State Northridge"),
    ("csuf", "Cal State Fullerton"),
    ("cal st. fullerton", "Cal State Fullerton"),
    ("csub", "Cal State Bakersfield"),
    ("cal st. bakersfield", "Cal State Bakersfield"),
    ("sac state", "Sacramento State"),
    ("long beach", "Long Beach State"),
    ("s. carolina upstate", "South Carolina Upstate"),
    ("s.c. upstate", "South Carolina Upstate"),
    ("sc upstate", "South Carolina Upstate"),
    ("usc upstate", "South Carolina Upstate"),
    ("s.c. state", "South Carolina State"),
    ("s. carolina st.", "South Carolina State"),
    ("south carolina st.", "South Carolina State"),
    ("fdu", "Fairleigh Dickinson"),
    ("mvsu", "Mississippi Valley State"),
    ("miss. valley st.", "Mississippi Valley State"),
];
