//! Built-in tagging tables: duty holders, duty types, POPIMAR

use std::sync::LazyLock;

use crate::rules::RuleTable;

/// Record field every built-in tagging table reads
pub const TEXT_FIELD: &str = "text";

/// Bounded UK duty-holder rows; roles must stand as whole words
const DUTYHOLDER_RULES: &[(&str, &str)] = &[
    (r"[ “][Ii]nvestor[ \.,:;”]", "Investor"),
    (r"[ “][Oo]wner[ \.,:;”]", "Owner"),
    (r"[ “][Ll]essee[ \.,:;”]", "Lessee"),
    (
        r"[ “][Oo]ccupier[ \.,:;”]|[Pp]erson[ ]who[ ]is[ ]in[ ]occupation",
        "Occupier",
    ),
    (r"[ “][Ee]mployer[ \.,:;”]", "Employer"),
    (
        r"[ “][Cc]ompany[ \.,:;”]|[ ][Bb]usiness[ \.,:;”]|[ ][Oo]rganisation[ \.,:;”]|[ ][Ee]nterprise[ \.,:;”]",
        "Company",
    ),
    (r"[ “][Ee]mployee[ \.,:;”]", "Employee"),
    (r"[ “][Ww]orker[ \.,:;”]", "Worker"),
    (r"[ “][Aa]ppropriate[ ][Pp]erson[ \.,:;”]", "Appropriate Person"),
    (r"[ “][Rr]esponsible[ ][Pp]erson[ \.,:;”]", "Responsible Person"),
    (r"[ “][Cc]ompetent[ ][Pp]erson[ \.,:;”]", "Competent Person"),
    (
        r"[ “][Aa]uthorised[ ][Pp]erson[ \.,:;”]|[Aa]uthorised [Bb]ody[ \.,:;”]",
        "Authorised Person",
    ),
    (r"[ “][Aa]ppointed[ ][Pp]erson[ \.,:;”]", "Appointed Person"),
    (r"[ “][Rr]elevant[ ][Pp]erson", "Relevant Person"),
    (r"[ “][Hh]older[ \.,:;”]", "Holder"),
    (r"[ “][Dd]uty[ ][Hh]older[ \.,:;”]", "Duty Holder"),
    (
        r"[ “][Pp]erson[ \.,:;”]|[Ee]veryone[ \.,:;”]|[Cc]itizen[ \.,:;”]",
        "Person",
    ),
    (r"[ “][Aa]dvis[oe]r[ \.,:;”]", "Advisor"),
    (
        r"[ “][Nn]urse[ \.,:;”]|[Pp]hysician[ \.,:;”]|[Dd]octor[ \.,:;”]",
        "OH Advisor",
    ),
    (r"[ “][Rr]epresentative[ \.,:;”]", "Representative"),
    (r"[ “][Tt]rade[ ][Uu]nion[ \.,:;”]", "TU"),
    (r"[ “][Aa]gent?s[ \.,:;”]", "Agent"),
    (
        r"[ “]Secretary[ ]of[ ]State[ \.,:;”]|[ “][Mm]iniste?ry?[ \.,:;”]",
        "Minister",
    ),
    (r"[ “][Rr]egulators?[ \.,:;”]", "Regulator"),
    (r"[ “][Ll]ocal[ ][Aa]uthority?i?e?s?[ \.,:;”]", "Regulator"),
    (
        r"[ “][Rr]egulati?on?r?y?[ ][Aa]uthority?i?e?s?[ \.,:;”]",
        "Regulator",
    ),
    (
        r"[ “][Ee]nforce?(?:ment|ing)[ ][Aa]uthority?i?e?s?[ \.,:;”]",
        "Regulator",
    ),
    (r"[ “][Aa]uthorised[ ][Oo]fficer[ \.,:;”]", "Officer"),
    (r"[ “][Pp]rincipal[ ][Dd]esigner[ \.,:;”]", "Principal Designer"),
    (r"[ “][Dd]esigner[ \.,:;”]", "Designer"),
    (r"[ “][Cc]onstructor[ \.,:;”]", "Constructor"),
    (r"[ “][Mm]anufacturer[ \.,:;”]", "Manufacturer"),
    (
        r"[ “][Pp]roducer[ \.,:;”]|person[ ]who.*?produces*?[—\.]",
        "Producer",
    ),
    (r"[ “][Aa]dvertiser[ \.,:;”]|[Mm]arketer[ \.,:;”]", "Marketer"),
    (r"[ “][Ss]upplier[ \.,:;”]", "Supplier"),
    (r"[ “][Dd]istributor[ \.,:;”]", "Distributor"),
    (r"[ “][Ss]eller[ \.,:;”]", "Seller"),
    (r"[ “][Rr]etailer[ \.,:;”]", "Retailer"),
    (r"[ “][Ss]torer[ \.,:;”]", "Storer"),
    (r"[ “][Cc]onsignor[ \.,:;”]", "Consignor"),
    (r"[ “][Hh]andler[ \.,:;”]", "Handler"),
    (r"[ “][Cc]onsignee[ \.,:;”]", "Consignee"),
    (
        r"[ “][Tt]ransporter[ \.,:;”]|person[ ]who.*?carries[—\.]",
        "Carrier",
    ),
    (r"[ “][Dd]river[ \.,:;”]", "Driver"),
    (
        r"[ “][Ii]mporter[ \.,:;”]|person[ ]who.*?imports*?[—\.]",
        "Importer",
    ),
    (
        r"[ “][Ee]xporter[ \.,:;”]|person[ ]who.*?exports*?[—\.]",
        "Exporter",
    ),
    (r"[ “][Ii]nstaller[ \.,:;”]", "Installer"),
    (r"[ “][Mm]aintainer[ \.,:;”]", "Maintainer"),
    (r"[ “][Rr]epairer[ \.,:;”]", "Repairer"),
    (r"[ “][Pp]rincipal[ ][Cc]ontractor", "Principal Contractor"),
    (r"[ “][Cc]ontractor[ \.,:;”]", "Contractor"),
    (r"[ “][Uu]ser[ \.,:;”]", "User"),
    (
        r"[ “][Oo]perator[ \.,:;”]|[Pp]erson[ ]who[ ]operates[ ]the[ ]plant",
        "Operator",
    ),
    (r"[ ]person[ ]who.*?keeps*?[—\.]", "Keeper"),
    (r"[ “][Rr]euser[ \.,:;”]", "Reuser"),
    (r"[ ]person[ ]who.*?treats*?[—\.]", "Treater"),
    (r"[ “][Rr]ecycler[ \.,:;”]", "Recycler"),
    (r"[ “][Dd]isposer[ \.,:;”]", "Disposer"),
    (r"[ “][Pp]olluter[ \.,:;”]", "Polluter"),
    (r"[ “][Aa]ssessors?[ \.,:;”]", "Assessor"),
    (r"[ “][Ii]nspector[ \.,:;”]", "Inspector"),
];

/// Unbounded UK duty-holder rows; substrings match anywhere
const DUTYHOLDER_LOOSE_RULES: &[(&str, &str)] = &[
    (r"[Ii]nvestor", "Investor"),
    (r"[Oo]wner", "Owner"),
    (r"[Oo]ccupier", "Occupier"),
    (r"[Ee]mployer", "Employer"),
    (
        r"[Cc]ompany|[Bb]usiness|[Oo]rganisation|[Ee]nterprise",
        "Company",
    ),
    (r"[Ee]mployee", "Employee"),
    (r"[Ww]orker", "Worker"),
    (r"[Rr]esponsible[ ][Pp]erson", "Responsible Person"),
    (r"[Cc]ompetent[ ][Pp]erson", "Competent Person"),
    (
        r"[Aa]uthorised[ ][Pp]erson|[Aa]uthorised [Bb]ody",
        "Authorised Person",
    ),
    (r"[Aa]ppointed[ ][Pp]erson", "Appointed Person"),
    (r"[Rr]elevant[ ][Pp]erson", "Relevant Person"),
    (r"[Dd]uty[ ][Hh]older", "Duty Holder"),
    (r"[Pp]erson|[Ee]veryone|[Cc]itizen", "Person"),
    (r"[Aa]dvis[oe]r", "Advisor"),
    (r"[Nn]urse|[Pp]hysician|[Dd]octor", "OH Advisor"),
    (r"[Rr]epresentative", "Representative"),
    (r"[Tt]rade[ ][Uu]nion", "TU"),
    (r"[Aa]gent[\s|\.]", "Agent"),
    (r"[Mm]iniste?ry?|[Rr]egulator\s?", "Ministry / Regulator"),
    (r"[Pp]rincipal[ ][Dd]esigner", "Principal Designer"),
    (r"[Dd]esigner", "Designer"),
    (r"[Cc]onstructor", "Constructor"),
    (r"[Mm]anufacturer", "Manufacturer"),
    (r"[Pp]roducer", "Producer"),
    (r"[Aa]dvertiser|[Mm]arketer", "Marketer"),
    (r"[Ss]upplier", "Supplier"),
    (r"[Dd]istributor", "Distributor"),
    (r"[Ss]eller", "Seller"),
    (r"[Rr]etailer", "Retailer"),
    (r"[Ss]torer", "Storer"),
    (r"[Cc]onsignor", "Consignor"),
    (r"[Hh]andler", "Handler"),
    (r"[Cc]onsignee", "Consignee"),
    (r"[Tt]ransporter", "Transporter"),
    (r"[Dd]river", "Driver"),
    (r"[Ii]mporter", "Importer"),
    (r"[Ee]xporter", "Exporter"),
    (r"[Ii]nstaller", "Installer"),
    (r"[Mm]aintainer", "Maintainer"),
    (r"[Rr]epairer", "Repairer"),
    (r"[Pp]rincipal[ ][Cc]ontractor", "Principal Contractor"),
    (r"[Cc]ontractor", "Contractor"),
    (r"[Uu]ser", "User"),
    (r"[Oo]perator", "Operator"),
    (r"[Rr]user", "Reuser"),
    (r"[Rr]ecycler", "Recycler"),
    (r"[Dd]isposer", "Disposer"),
    (r"[Pp]olluter", "Polluter"),
    (r"[Aa]ssessor[\s|\.]", "Assessor"),
    (r"[Ii]nspector", "Inspector"),
];

/// Duty holders for English translations of Russian law
const DUTYHOLDER_RUS_RULES: &[(&str, &str)] = &[
    (r"[Ii]nvestor", "Investor"),
    (r"[Oo]wner", "Owner"),
    (r"[Oo]ccupier", "Occupier"),
    (r"[Ee]mployer", "Employer"),
    (
        r"[Cc]ompany|[Bb]usiness|[Oo]rganisation|[Ee]nterprise",
        "Company",
    ),
    (r"[Ee]mployee", "Employee"),
    (r"[Ww]orker", "Worker"),
    (r"[Pp]erson|[Ee]veryone|[Cc]itizen", "Person"),
    (r"[Aa]dvis[oe]r", "Advisor"),
    (r"[Nn]urse|[Pp]hysician|[Dd]octor", "OH Advisor"),
    (r"[Rr]epresentative", "Rep"),
    (r"[Tt]rade[ ][Uu]nion", "TU"),
    (r"[Aa]gent[\s|\.]", "Agent"),
    (r"[Mm]iniste?ry?|[Rr]egulator\s?", "Ministry / Regulator"),
    (r"[Dd]esigner", "Designer"),
    (r"[Cc]onstructor", "Constructor"),
    (r"[Mm]anufacturer", "Manufacturer"),
    (r"[Pp]roducer", "Producer"),
    (r"[Aa]dvertiser|[Mm]arketer", "Marketer"),
    (r"[Ss]upplier", "Supplier"),
    (r"[Dd]istributor", "Distributor"),
    (r"[Ss]eller", "Seller"),
    (r"[Rr]etailer", "Retailer"),
    (r"[Ss]torer", "Storer"),
    (r"[Cc]onsignor", "Consignor"),
    (r"[Hh]andler", "Handler"),
    (r"[Cc]onsignee", "Consignee"),
    (r"[Tt]ransporter", "Transporter"),
    (r"[Dd]river", "Driver"),
    (r"[Ii]mporter", "Importer"),
    (r"[Ee]xporter", "Exporter"),
    (r"[Ii]nstaller", "Installer"),
    (r"[Mm]aintainer", "Maintainer"),
    (r"[Rr]epairer", "Repairer"),
    (r"[Cc]ontractor", "Contractor"),
    (r"[Uu]ser", "User"),
    (r"[Oo]perator", "Operator"),
    (r"[Rr]user", "Reuser"),
    (r"[Rr]ecycler", "Recycler"),
    (r"[Dd]isposer", "Disposer"),
    (r"[Pp]olluter", "Polluter"),
    (
        r"[Aa]uthorised [Pp]erson|[Aa]uthorised [Bb]ody",
        "Authorised Person",
    ),
    (r"[Aa]ssessor[\s|\.]", "Assessor"),
    (r"[Ii]nspector", "Inspector"),
];

const DUTY_TYPE_RULES: &[(&str, &str)] = &[
    (r"[ ][Nn]o[ ]person[ ]shall", "Duty"),
    (r"[ ][Tt]he[ ]person.*?must[ ]use", "Duty"),
    (r"[ ][Tt]he[ ]person.*?shall", "Duty"),
    (
        r"[ ][Pp]erson[ ](?:shall[ ]notify|shall[ ]furnish[ ]the[ ]authority)\]",
        "Duty",
    ),
    (r"[ ]A[ ]person[ ]shall[ ]not", "Duty"),
    (r"[ ]shall[ ]be[ ]the[ ]duty[ ]of[ ]any[ ]person", "Duty"),
    (r"[ ][Pp]erson[ ]*?may[ ]at[ ]any[ ]time\]", "Right"),
    (
        r"[a-z]”[ ](?:means|includes|has?v?e?[ ]the[ ](?:same )?meanings?|is|are[ ]to[ ]be[ ]read[ ]as)[ —]",
        r#""Interpretation, Definition""#,
    ),
    (
        r"[ ]has?v?e?[ ]the[ ](?:same )?meanings?[ ]as",
        r#""Interpretation, Definition""#,
    ),
    (
        r"[ ]any[ ]reference[ ]in[ ]this[ ].*?to",
        r#""Interpretation, Definition""#,
    ),
    (
        r"[ ][Ff]or[ ]the[ ]purposes[ ]of.*?[ ](?:Part|Chapter|[sS]ection|subsection)",
        r#""Interpretation, Definition""#,
    ),
    (
        r"[ ]This[ ](?:Part|Chapter|[Ss]ection)[ ]applies",
        r#""Application, Scope""#,
    ),
    (
        r"[ ]This[ ](?:Part|Chapter|[Ss]ection)[ ]does[ ]not[ ]apply",
        r#""Application, Scope""#,
    ),
    (r"[ ]does[ ]not[ ]apply", r#""Application, Scope""#),
    (r"[ ][Aa]ppeal[ ]", r#""Defence, Exemptions, Appeals""#),
    (r"[ ][Oo]ffence[ ]|[ ]fixed[ ]penalty", "Offences"),
    (r"shall not[ ]", "Exemption"),
];

const POPIMAR_RULES: &[(&str, &str)] = &[
    (
        r"[ “][Pp]ermit[ \.,:;”]|[ ][Aa]uthorisation[ \.,:;”]|[Ll]i[sc]en[sc]e",
        r#""Permit, Authorisation, License""#,
    ),
    (
        r"[ “][Cc]hecki?n?g?[ \.,:;”]|[ ][Mm]onitori?n?g?[ \.,:;”]",
        "Monitor",
    ),
    (r"[ “][Rr]eviewi?n?g?[ \.,:;”]", "Review"),
];

fn builtin(name: &str, rules: &[(&str, &str)]) -> RuleTable {
    RuleTable::new(name, TEXT_FIELD, rules).expect("Valid built-in rule table")
}

pub static DUTYHOLDERS: LazyLock<RuleTable> =
    LazyLock::new(|| builtin("dutyholders", DUTYHOLDER_RULES));

pub static DUTYHOLDERS_LOOSE: LazyLock<RuleTable> =
    LazyLock::new(|| builtin("dutyholders-loose", DUTYHOLDER_LOOSE_RULES));

pub static DUTYHOLDERS_RUS: LazyLock<RuleTable> =
    LazyLock::new(|| builtin("dutyholders-rus", DUTYHOLDER_RUS_RULES));

pub static DUTY_TYPES: LazyLock<RuleTable> =
    LazyLock::new(|| builtin("duty-type", DUTY_TYPE_RULES));

pub static POPIMAR: LazyLock<RuleTable> = LazyLock::new(|| builtin("popimar", POPIMAR_RULES));

/// All built-in tagging tables, in listing order
pub fn builtin_tables() -> [&'static RuleTable; 5] {
    [
        &DUTYHOLDERS,
        &DUTYHOLDERS_LOOSE,
        &DUTYHOLDERS_RUS,
        &DUTY_TYPES,
        &POPIMAR,
    ]
}

/// Look up a built-in table by name
pub fn builtin_table(name: &str) -> Option<&'static RuleTable> {
    builtin_tables().into_iter().find(|t| t.name() == name)
}
