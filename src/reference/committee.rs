// src/reference/committee.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// FEC committee id → registered committee name.
pub static CMTE_NM: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("C00458844", "MARCO RUBIO FOR PRESIDENT"),
        ("C00500587", "PERRY FOR PRESIDENT INC"),
        ("C00573519", "CARSON AMERICA"),
        ("C00574624", "CRUZ FOR PRESIDENT"),
        ("C00575449", "RAND PAUL FOR PRESIDENT, INC."),
        ("C00575795", "HILLARY FOR AMERICA"),
        ("C00577130", "BERNIE 2016"),
        ("C00577312", "CARLY FOR PRESIDENT"),
        ("C00577981", "HUCKABEE FOR PRESIDENT, INC."),
        ("C00578245", "PATAKI FOR PRESIDENT INC"),
        ("C00578492", "SANTORUM FOR PRESIDENT 2016"),
        ("C00578658", "O'MALLEY FOR PRESIDENT"),
        ("C00578757", "LINDSEY GRAHAM 2016"),
        ("C00579458", "JEB 2016, INC."),
        ("C00580100", "DONALD J. TRUMP FOR PRESIDENT, INC."),
        ("C00580159", "JINDAL FOR PRESIDENT"),
        ("C00580399", "CHRIS CHRISTIE FOR PRESIDENT INC"),
        ("C00580480", "SCOTT WALKER INC"),
        ("C00581199", "JILL STEIN FOR PRESIDENT"),
        ("C00581215", "WEBB 2016"),
        ("C00581876", "KASICH FOR AMERICA INC"),
        ("C00582668", "GILMORE FOR AMERICA LLC"),
        ("C00583146", "LESSIG2016.US"),
        ("C00605568", "GARY JOHNSON 2016"),
        ("C00623884", "MCMULLIN FOR PRESIDENT COMMITTEE INC."),
    ])
});
