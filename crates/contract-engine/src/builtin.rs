//! Built-in employment contract patterns

use contract_types::RiskLevel;
use lazy_static::lazy_static;

use crate::catalog::{ClauseTypeSpec, PatternCatalog, RedFlagSpec};

lazy_static! {
    pub(crate) static ref BUILTIN_CATALOG: PatternCatalog =
        PatternCatalog::from_specs(RED_FLAG_SPECS, CLAUSE_TYPE_SPECS)
            .expect("built-in pattern catalog is valid");
}

/// Red-flag definitions, in reporting order
pub const RED_FLAG_SPECS: &[RedFlagSpec<'static>] = &[
    RedFlagSpec {
        id: "salary-unclear",
        title: "Missing or Unclear Salary",
        triggers: &[
            r"salary\s*(will be|to be|shall be)\s*(discussed|determined|negotiated)",
            r"compensation\s*(as per|based on|according to)\s*(industry|market|company)\s*standards?",
            r"competitive\s*(salary|compensation|pay)",
            r"remuneration\s*(details|terms)\s*(to follow|tbd|to be determined)",
        ],
        risk_level: RiskLevel::High,
        explanation: "Your contract should state a specific salary amount. Vague terms like \"competitive\" or \"to be discussed\" leave room for disagreement later.",
        learn_more_link: "/learn#salary",
        category: "payment",
    },
    RedFlagSpec {
        id: "unlimited-hours",
        title: "Unlimited or Undefined Working Hours",
        triggers: &[
            r"work(ing)?\s*hours?\s*(as\s*)?(required|needed|necessary)",
            r"flexible\s*hours?\s*as\s*(business\s*)?needs?\s*(require|dictate)",
            r"no\s*(set|fixed|defined)\s*(working\s*)?hours?",
            r"hours?\s*may\s*(vary|change)\s*(significantly|substantially)?",
            r"(expected\s*to|must)\s*(work|be\s*available)\s*(at all times|24/7|around the clock)",
            r"unlimited\s*(working\s*)?hours?",
        ],
        risk_level: RiskLevel::High,
        explanation: "Without defined working hours, you could be expected to work excessive overtime without additional compensation.",
        learn_more_link: "/learn#working-hours",
        category: "hours",
    },
    RedFlagSpec {
        id: "termination-no-notice",
        title: "Termination Without Notice",
        triggers: &[
            r"terminat(e|ion)\s*(immediately|without\s*notice|at\s*will)",
            r"employment\s*may\s*be\s*terminated\s*at\s*any\s*time",
            r"employer\s*reserves?\s*(the\s*)?right\s*to\s*terminat",
            r"dismiss(al)?\s*without\s*(prior\s*)?notice",
            r"no\s*notice\s*period\s*(is\s*)?(required|necessary)",
        ],
        risk_level: RiskLevel::High,
        explanation: "You should have a reasonable notice period (typically 2-4 weeks) to find new employment if terminated.",
        learn_more_link: "/learn#termination",
        category: "termination",
    },
    RedFlagSpec {
        id: "excessive-probation",
        title: "Excessive Probation Period",
        triggers: &[
            r"probation(ary)?\s*(period)?\s*(of\s*)?(12|eighteen|24|twelve)\s*months?",
            r"probation(ary)?\s*(period)?\s*(of\s*)?(1|one|2|two)\s*years?",
            r"extended\s*probation(ary)?\s*period",
            r"probation\s*may\s*be\s*extended\s*(indefinitely|without\s*limit)",
        ],
        risk_level: RiskLevel::Medium,
        explanation: "Probation periods over 6 months are unusual. During probation, you typically have fewer protections and shorter notice periods.",
        learn_more_link: "/learn#probation",
        category: "probation",
    },
    RedFlagSpec {
        id: "broad-non-compete",
        title: "Overly Broad Non-Compete Clause",
        triggers: &[
            r"non-?compete\s*(clause|agreement|covenant)?\s*(of\s*)?(2|3|4|5|two|three|four|five)\s*years?",
            r"worldwide\s*(non-?compete|restriction)",
            r"global(ly)?\s*restrict(ed|ion)",
            r"prohibit(ed|s)?\s*from\s*working\s*(in|for)\s*(any|the\s*entire)\s*industry",
            r"shall\s*not\s*(work|engage|compete)\s*(anywhere|globally)",
        ],
        risk_level: RiskLevel::Medium,
        explanation: "Non-compete clauses should be limited in scope (specific competitors), geography (reasonable area), and time (6-12 months typically).",
        learn_more_link: "/learn#non-compete",
        category: "restrictions",
    },
    RedFlagSpec {
        id: "resignation-penalty",
        title: "Financial Penalty for Resignation",
        triggers: &[
            r"(penalty|fee|fine)\s*(for|upon|if)\s*(early\s*)?(resign|leav|terminat)",
            r"forfeit(ure)?\s*(of\s*)?(wages?|salary|bonus|payment)",
            r"(pay|repay|reimburse)\s*(training|costs?|expenses?)\s*(if|upon)\s*(you\s*)?(resign|leave)",
            r"deduct(ion)?\s*from\s*(final\s*)?(pay|salary)\s*(if|upon)\s*(resign|early)",
            r"bond\s*(period|amount|requirement)",
        ],
        risk_level: RiskLevel::High,
        explanation: "Requiring payment for resigning may not be legal in many jurisdictions. You should be able to leave your job without financial penalties.",
        learn_more_link: "/learn#termination",
        category: "termination",
    },
    RedFlagSpec {
        id: "one-sided-confidentiality",
        title: "One-Sided Confidentiality Clause",
        triggers: &[
            r"employee\s*(shall|must|agrees?\s*to)\s*(not\s*)?(disclose|share|reveal)\s*(any|all)\s*information",
            r"all\s*information\s*(is|shall be|will be)\s*(considered\s*)?confidential",
            r"perpetual\s*confidentiality",
            r"confidentiality\s*(obligations?\s*)?(survive|continue)\s*indefinitely",
            r"unlimited\s*confidentiality\s*(obligations?|period)",
        ],
        risk_level: RiskLevel::Medium,
        explanation: "Confidentiality should be mutual and limited to genuinely sensitive business information, not general knowledge or skills you develop.",
        learn_more_link: "/learn#non-compete",
        category: "restrictions",
    },
    RedFlagSpec {
        id: "no-overtime-pay",
        title: "No Overtime Compensation",
        triggers: &[
            r"no\s*(additional\s*)?(overtime\s*)?(pay|compensation|payment)",
            r"overtime\s*(is\s*)?(not\s*)?(compensat|paid|payable)",
            r"salary\s*(includes?|covers?)\s*(all\s*)?overtime",
            r"exempt\s*from\s*overtime",
            r"inclusive\s*of\s*(all\s*)?hours?\s*worked",
        ],
        risk_level: RiskLevel::Medium,
        explanation: "In many places, employers are legally required to pay overtime. Make sure you understand your overtime rights.",
        learn_more_link: "/learn#working-hours",
        category: "payment",
    },
    RedFlagSpec {
        id: "ip-assignment-broad",
        title: "Broad Intellectual Property Assignment",
        triggers: &[
            r"all\s*(intellectual\s*property|inventions?|creations?|works?)\s*(belong|assigned|transfer)",
            r"(ip|intellectual\s*property)\s*created\s*(at\s*any\s*time|outside\s*work)",
            r"assign\s*(all\s*)?(rights?|ownership)\s*(in\s*)?(any|all)\s*(work|invention)",
            r"work\s*for\s*hire\s*(includes?|covers?)\s*(personal|outside)\s*(time|projects?)",
        ],
        risk_level: RiskLevel::Low,
        explanation: "IP clauses should only cover work created during employment hours using company resources, not personal projects.",
        learn_more_link: "/learn#non-compete",
        category: "restrictions",
    },
    RedFlagSpec {
        id: "unilateral-changes",
        title: "Unilateral Contract Changes",
        triggers: &[
            r"employer\s*(may|can|reserves?\s*(the\s*)?right\s*to)\s*(change|modify|amend)\s*(terms?|conditions?)",
            r"(terms?|conditions?)\s*(may|can)\s*be\s*(changed|modified)\s*(at\s*)?(any\s*time|sole\s*discretion)",
            r"without\s*(prior\s*)?notice\s*(or\s*)?consent",
            r"reserves?\s*(the\s*)?right\s*to\s*(alter|vary)\s*(your\s*)?(duties|role|responsibilities)",
        ],
        risk_level: RiskLevel::Medium,
        explanation: "Significant contract changes should require mutual agreement. One-sided change clauses can leave you vulnerable.",
        learn_more_link: "/learn#job-role",
        category: "general",
    },
];

/// Clause-type definitions, in tie-break order
///
/// Keywords start at an ASCII word boundary, so a keyword directly after an
/// accented letter still counts ("Épay" classifies as salary).
pub const CLAUSE_TYPE_SPECS: &[ClauseTypeSpec<'static>] = &[
    ClauseTypeSpec {
        clause_type: "salary",
        title: "Salary & Compensation",
        triggers: &[r"(?-u:\b)(salary|compensation|remuneration|pay|wage|earning)"],
    },
    ClauseTypeSpec {
        clause_type: "hours",
        title: "Working Hours",
        triggers: &[r"(?-u:\b)(working hours?|work hours?|office hours?|schedule|overtime)"],
    },
    ClauseTypeSpec {
        clause_type: "leave",
        title: "Leave & Benefits",
        triggers: &[r"(?-u:\b)(leave|vacation|holiday|sick|benefit|insurance|pension)"],
    },
    ClauseTypeSpec {
        clause_type: "termination",
        title: "Termination",
        triggers: &[r"(?-u:\b)(termination|notice period|resignation|dismissal|end of employment)"],
    },
    ClauseTypeSpec {
        clause_type: "probation",
        title: "Probation Period",
        triggers: &[r"(?-u:\b)(probation|trial period|initial period)"],
    },
    ClauseTypeSpec {
        clause_type: "confidentiality",
        title: "Confidentiality",
        triggers: &[r"(?-u:\b)(confidential|non-disclosure|nda|trade secret|proprietary)"],
    },
    ClauseTypeSpec {
        clause_type: "non-compete",
        title: "Non-Compete & Restrictions",
        triggers: &[r"(?-u:\b)(non-?compete|non-?solicitation|restriction|covenant)"],
    },
    ClauseTypeSpec {
        clause_type: "ip",
        title: "Intellectual Property",
        triggers: &[r"(?-u:\b)(intellectual property|invention|patent|copyright|work for hire)"],
    },
    ClauseTypeSpec {
        clause_type: "duties",
        title: "Job Role & Duties",
        triggers: &[r"(?-u:\b)(duties|responsibilities|role|position|job description)"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_compiles() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.red_flags().len(), RED_FLAG_SPECS.len());
        assert_eq!(catalog.clause_types().len(), CLAUSE_TYPE_SPECS.len());
    }

    #[test]
    fn test_every_red_flag_has_triggers_and_copy() {
        for spec in RED_FLAG_SPECS {
            assert!(!spec.triggers.is_empty(), "{} has no triggers", spec.id);
            assert!(!spec.explanation.is_empty(), "{} has no explanation", spec.id);
            assert!(spec.learn_more_link.starts_with("/learn#"));
        }
    }

    #[test]
    fn test_clause_keyword_after_accented_letter() {
        let catalog = PatternCatalog::builtin();
        let clause = catalog
            .classify("Allowances are listed under the heading Épay for each month")
            .map(|pattern| pattern.clause_type.as_str());
        assert_eq!(clause, Some("salary"));
    }

    #[test]
    fn test_clause_keyword_inside_ascii_word_ignored() {
        let catalog = PatternCatalog::builtin();
        assert!(catalog
            .classify("Allowances are listed under the heading repayable each month")
            .is_none());
    }
}
