//! Static route catalog: the fixed informational pages plus the service and
//! specialty route tables, keyed by slug. Slugs missing from a table get
//! generated metadata derived from the slug text.

/// Display metadata for one catalog route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMeta {
    pub title: String,
    pub description: String,
}

/// Fixed informational pages: (path, title, meta description).
/// Paths are site-root-relative, no leading slash.
pub const STATIC_PAGES: &[(&str, &str, &str)] = &[
    (
        "about",
        "About Medtransic | Medical Billing Company",
        "Learn about Medtransic, a full-service medical billing company helping practices nationwide maximize revenue and reduce administrative burden.",
    ),
    (
        "contact",
        "Contact Us | Medtransic Medical Billing",
        "Get in touch with Medtransic for a free billing analysis. Phone, email, and online consultation scheduling available.",
    ),
    (
        "pricing",
        "Medical Billing Pricing | Transparent Rates | Medtransic",
        "Simple, transparent medical billing pricing with no hidden fees. Pay a small percentage of collections, only when you get paid.",
    ),
    (
        "faq",
        "Frequently Asked Questions | Medtransic",
        "Answers to common questions about outsourced medical billing, pricing, onboarding, EHR compatibility, and compliance.",
    ),
    (
        "testimonials",
        "Client Testimonials | Medtransic Medical Billing",
        "See what physicians and practice managers say about partnering with Medtransic for their medical billing and revenue cycle needs.",
    ),
    (
        "careers",
        "Careers at Medtransic | Join Our Team",
        "Explore open positions at Medtransic. We hire certified coders, billing specialists, and client success managers.",
    ),
    (
        "why-medtransic",
        "Why Choose Medtransic | Medical Billing Experts",
        "Why practices choose Medtransic: 98% clean claim rate, dedicated account managers, and revenue gains averaging 15-20%.",
    ),
    (
        "get-started",
        "Get Started | Free Billing Analysis | Medtransic",
        "Start with a free practice billing analysis. We review your current collections and show you exactly where revenue is leaking.",
    ),
    (
        "privacy-policy",
        "Privacy Policy | Medtransic",
        "How Medtransic collects, uses, and protects personal and health information in compliance with HIPAA and applicable law.",
    ),
    (
        "terms-of-service",
        "Terms of Service | Medtransic",
        "The terms and conditions governing use of the Medtransic website and services.",
    ),
    (
        "medical-billing-services",
        "Medical Billing Services by State | Medtransic",
        "Medtransic provides medical billing services across all 50 states. Find local billing expertise for your practice.",
    ),
    (
        "specialties",
        "Medical Billing by Specialty | 50+ Specialties | Medtransic",
        "Specialty-specific medical billing for over 50 medical specialties, from cardiology to urgent care.",
    ),
    (
        "comparisons",
        "Compare Medical Billing Companies | Medtransic",
        "Side-by-side comparisons of Medtransic and other medical billing companies: pricing, services, and results.",
    ),
    (
        "integrations",
        "EHR & EMR Integrations | Medtransic",
        "Medtransic works inside your existing EHR/EMR system. See the platforms we support, from Epic to Kareo.",
    ),
    (
        "resources",
        "Medical Billing Resources | Guides & Tools | Medtransic",
        "Free medical billing resources: coding references, denial management guides, and compliance checklists.",
    ),
    (
        "resources/medical-billing-glossary",
        "Medical Billing Glossary | Key Terms Explained | Medtransic",
        "Plain-English definitions of medical billing terms: EOB, ERA, clean claim, capitation, and more.",
    ),
    (
        "resources/cpt-codes",
        "CPT Code Lookup & Reference | Medtransic",
        "Searchable CPT code reference with descriptions and billing guidance for the most commonly used procedure codes.",
    ),
    (
        "resources/icd-10-codes",
        "ICD-10 Code Reference | Medtransic",
        "ICD-10 diagnosis code reference with specialty-specific code lists and documentation tips.",
    ),
    (
        "resources/denial-management-guide",
        "Claim Denial Management Guide | Medtransic",
        "A practical guide to preventing, analyzing, and appealing claim denials to recover lost revenue.",
    ),
    (
        "resources/hipaa-compliance",
        "HIPAA Compliance for Medical Billing | Medtransic",
        "What HIPAA requires of your billing operation and how Medtransic keeps PHI secure end to end.",
    ),
];

/// Service routes: (slug, title, meta description). Emitted under `services/`.
pub const SERVICES: &[(&str, &str, &str)] = &[
    ("medical-billing", "Medical Billing Services | End-to-End RCM | Medtransic", "Complete outsourced medical billing: charge entry through payment posting, with a 98% clean claim rate."),
    ("medical-coding", "Medical Coding Services | Certified Coders | Medtransic", "AAPC-certified coding for accurate CPT, ICD-10, and HCPCS assignment that maximizes compliant reimbursement."),
    ("revenue-cycle-management", "Revenue Cycle Management Services | Medtransic", "Full revenue cycle management from eligibility to final payment, engineered to shorten your days in A/R."),
    ("denial-management", "Denial Management Services | Appeal & Recover | Medtransic", "Systematic denial prevention, root-cause analysis, and appeals that recover revenue other billers write off."),
    ("credentialing", "Provider Credentialing Services | Medtransic", "Payer enrollment and credentialing handled start to finish so new providers start billing sooner."),
    ("accounts-receivable-recovery", "A/R Recovery Services | Old Claims Collected | Medtransic", "Aggressive follow-up on aging accounts receivable, including claims your current biller has given up on."),
    ("eligibility-verification", "Insurance Eligibility Verification Services | Medtransic", "Real-time eligibility and benefits verification before every visit to stop denials before they happen."),
    ("prior-authorization", "Prior Authorization Services | Medtransic", "Dedicated prior-auth specialists who secure approvals fast and keep your schedule moving."),
    ("charge-entry", "Charge Entry Services | Same-Day Turnaround | Medtransic", "Accurate same-day charge entry with built-in scrubbing to catch errors before claims go out."),
    ("payment-posting", "Payment Posting Services | ERA & Manual | Medtransic", "Precise ERA and manual payment posting with variance flagging so underpayments never slip through."),
    ("claims-submission", "Claims Submission Services | Clean Claims | Medtransic", "Scrubbed, compliant electronic claims submitted within 24 hours of charge capture."),
    ("patient-billing", "Patient Billing & Statements | Medtransic", "Clear patient statements, online payment options, and courteous follow-up that protects your reputation."),
    ("old-ar-cleanup", "Old A/R Cleanup Services | Medtransic", "One-time cleanup projects for backlogged accounts receivable, worked by dedicated recovery teams."),
    ("mips-reporting", "MIPS Reporting Services | Avoid Penalties | Medtransic", "MIPS measure selection, data capture, and submission that protects your Medicare reimbursement."),
    ("telehealth-billing", "Telehealth Billing Services | Medtransic", "Telehealth billing with correct modifiers, place-of-service codes, and payer-specific rules."),
    ("out-of-network-billing", "Out-of-Network Billing Services | Medtransic", "Out-of-network claim strategy, negotiation, and patient advocacy that maximizes allowed amounts."),
    ("dme-billing", "DME Billing Services | Medtransic", "Durable medical equipment billing with documentation review and same-or-similar checks."),
    ("laboratory-billing", "Laboratory Billing Services | Medtransic", "High-volume lab billing with panel bundling rules, medical necessity edits, and clean CLIA handling."),
    ("ambulance-billing", "Ambulance Billing Services | Medtransic", "EMS and ambulance billing with correct level-of-service coding and mileage documentation."),
    ("hospital-billing", "Hospital Billing Services | UB-04 Experts | Medtransic", "Institutional UB-04 billing for hospitals and facilities, including DRG validation."),
    ("physician-billing", "Physician Billing Services | Medtransic", "Professional-fee billing for physician practices of every size, on CMS-1500 done right."),
    ("front-desk-support", "Front Desk Support Services | Medtransic", "Remote front-desk support: scheduling, intake, and insurance capture that feeds clean claims."),
    ("virtual-medical-assistant", "Virtual Medical Assistant Services | Medtransic", "HIPAA-trained virtual assistants for scheduling, refill requests, and patient communication."),
    ("medical-transcription", "Medical Transcription Services | Medtransic", "Fast, accurate transcription that keeps documentation complete and audit-ready."),
    ("practice-management", "Practice Management Services | Medtransic", "Operational support beyond billing: reporting, workflow design, and payer contract insight."),
    ("ehr-emr-support", "EHR & EMR Support Services | Medtransic", "We bill inside your existing EHR/EMR. No data migration, no new software to learn."),
    ("billing-audit", "Medical Billing Audit Services | Medtransic", "Independent billing and coding audits that find compliance risk and missed revenue."),
    ("contract-negotiation", "Payer Contract Negotiation Services | Medtransic", "Fee schedule analysis and payer negotiation that raises your effective reimbursement rates."),
    ("patient-scheduling", "Patient Scheduling Services | Medtransic", "Centralized scheduling support that fills your calendar and cuts no-show rates."),
];

/// Specialty routes: (slug, title, meta description). Emitted under `specialties/`.
pub const SPECIALTIES: &[(&str, &str, &str)] = &[
    ("cardiology", "Cardiology Medical Billing Services | Medtransic", "Cardiology billing experts for caths, echoes, EKGs, and device checks, with bundling rules handled correctly."),
    ("dermatology", "Dermatology Medical Billing Services | Medtransic", "Dermatology billing with correct lesion coding, biopsy bundling, and Mohs surgery documentation."),
    ("orthopedics", "Orthopedic Medical Billing Services | Medtransic", "Orthopedic billing for surgeries, casting, DME, and global period management."),
    ("pediatrics", "Pediatric Medical Billing Services | Medtransic", "Pediatric billing with vaccine administration codes, well-visit rules, and Medicaid expertise."),
    ("psychiatry", "Psychiatry Medical Billing Services | Medtransic", "Psychiatry billing for E/M plus psychotherapy add-ons, with telehealth parity rules handled."),
    ("neurology", "Neurology Medical Billing Services | Medtransic", "Neurology billing for EEGs, EMGs, and infusion services with prior-auth support."),
    ("oncology", "Oncology Medical Billing Services | Medtransic", "Oncology billing for chemo administration, drug units, and buy-and-bill reconciliation."),
    ("radiology", "Radiology Medical Billing Services | Medtransic", "Radiology billing with correct professional/technical component splits and modifier usage."),
    ("anesthesiology", "Anesthesiology Medical Billing Services | Medtransic", "Anesthesia billing with base units, time units, and medical direction modifiers done right."),
    ("gastroenterology", "Gastroenterology Medical Billing Services | Medtransic", "GI billing for screening vs diagnostic colonoscopy rules and facility coordination."),
    ("urology", "Urology Medical Billing Services | Medtransic", "Urology billing for in-office procedures, lithotripsy, and surgical global periods."),
    ("ophthalmology", "Ophthalmology Medical Billing Services | Medtransic", "Ophthalmology billing with eye codes vs E/M optimization and injection billing."),
    ("ent-otolaryngology", "ENT Medical Billing Services | Medtransic", "ENT billing for scopes, allergy testing, and audiology with correct bundling edits."),
    ("family-medicine", "Family Medicine Billing Services | Medtransic", "Family practice billing covering preventive visits, chronic care management, and AWVs."),
    ("internal-medicine", "Internal Medicine Billing Services | Medtransic", "Internal medicine billing with TCM, CCM, and complex E/M leveling support."),
    ("obgyn", "OB/GYN Medical Billing Services | Medtransic", "OB/GYN billing for global maternity packages, ultrasounds, and well-woman visits."),
    ("physical-therapy", "Physical Therapy Billing Services | Medtransic", "PT billing with timed-unit rules, the 8-minute rule, and plan-of-care compliance."),
    ("chiropractic", "Chiropractic Billing Services | Medtransic", "Chiropractic billing with CMT coding, medical necessity documentation, and Medicare rules."),
    ("podiatry", "Podiatry Medical Billing Services | Medtransic", "Podiatry billing for routine foot care exceptions, surgeries, and DME."),
    ("pain-management", "Pain Management Billing Services | Medtransic", "Pain management billing for injections, RFAs, and fluoroscopy with prior-auth handling."),
    ("behavioral-health", "Behavioral Health Billing Services | Medtransic", "Behavioral health billing for therapy, IOP/PHP levels of care, and parity compliance."),
    ("mental-health", "Mental Health Billing Services | Medtransic", "Mental health billing for counselors, psychologists, and group practices."),
    ("dental", "Dental Billing Services | Medtransic", "Dental billing and medical-dental cross coding for oral surgery and sleep appliances."),
    ("oral-surgery", "Oral Surgery Billing Services | Medtransic", "Oral and maxillofacial surgery billing across medical and dental payers."),
    ("plastic-surgery", "Plastic Surgery Billing Services | Medtransic", "Plastic surgery billing separating cosmetic from reconstructive with airtight documentation."),
    ("general-surgery", "General Surgery Billing Services | Medtransic", "General surgery billing with global period tracking, co-surgeon and assistant modifiers."),
    ("vascular-surgery", "Vascular Surgery Billing Services | Medtransic", "Vascular billing for endovascular procedures with component coding expertise."),
    ("neurosurgery", "Neurosurgery Billing Services | Medtransic", "Neurosurgery billing for complex spine and cranial cases with payer-specific edits."),
    ("pulmonology", "Pulmonology Billing Services | Medtransic", "Pulmonology billing for PFTs, bronchoscopy, and sleep study interpretation."),
    ("rheumatology", "Rheumatology Billing Services | Medtransic", "Rheumatology billing with infusion drug units, JW modifiers, and biologic prior auths."),
    ("endocrinology", "Endocrinology Billing Services | Medtransic", "Endocrinology billing for CGM services, ultrasounds, and biopsy coding."),
    ("nephrology", "Nephrology Billing Services | Medtransic", "Nephrology billing for MCP dialysis rounds, CKD staging, and transplant follow-up."),
    ("infectious-disease", "Infectious Disease Billing Services | Medtransic", "ID billing for inpatient consults, OPAT management, and prolonged services."),
    ("allergy-immunology", "Allergy & Immunology Billing Services | Medtransic", "Allergy billing for testing panels, immunotherapy builds, and serum tracking."),
    ("sleep-medicine", "Sleep Medicine Billing Services | Medtransic", "Sleep medicine billing for in-lab studies, HSATs, and DME compliance."),
    ("sports-medicine", "Sports Medicine Billing Services | Medtransic", "Sports medicine billing for injections, ultrasound guidance, and PT coordination."),
    ("wound-care", "Wound Care Billing Services | Medtransic", "Wound care billing for debridement depth coding and skin substitute grafts."),
    ("home-health", "Home Health Billing Services | Medtransic", "Home health billing under PDGM with OASIS alignment and NOA tracking."),
    ("hospice", "Hospice Billing Services | Medtransic", "Hospice billing with level-of-care days, NOEs, and service-intensity add-ons."),
    ("skilled-nursing", "Skilled Nursing Facility Billing Services | Medtransic", "SNF billing under PDPM with accurate assessment-driven rates."),
    ("urgent-care", "Urgent Care Billing Services | Medtransic", "Urgent care billing with S codes, after-hours codes, and high-volume throughput."),
    ("emergency-medicine", "Emergency Medicine Billing Services | Medtransic", "EM billing with acuity leveling, critical care time, and out-of-network strategy."),
    ("ambulatory-surgery", "Ambulatory Surgery Center Billing Services | Medtransic", "ASC billing with grouper rates, implant invoicing, and payer carve-outs."),
    ("dialysis", "Dialysis Center Billing Services | Medtransic", "Dialysis facility billing under the ESRD PPS with consolidated billing edits."),
    ("geriatrics", "Geriatric Medicine Billing Services | Medtransic", "Geriatrics billing for AWVs, advance care planning, and cognitive assessments."),
    ("occupational-therapy", "Occupational Therapy Billing Services | Medtransic", "OT billing with timed codes, evaluation complexity levels, and Medicare caps."),
    ("speech-therapy", "Speech Therapy Billing Services | Medtransic", "SLP billing for evaluations, treatment sessions, and swallowing studies."),
    ("optometry", "Optometry Billing Services | Medtransic", "Optometry billing balancing vision plans and medical insurance correctly."),
    ("acupuncture", "Acupuncture Billing Services | Medtransic", "Acupuncture billing with timed sets, Medicare's chronic low back pain coverage, and cash-pay hybrid models."),
    ("genetics", "Medical Genetics Billing Services | Medtransic", "Genetics billing for counseling sessions, test orders, and Z-code registration."),
];

/// Words that stay fully uppercased in derived display text.
const ACRONYMS: &[(&str, &str)] = &[
    ("faq", "FAQ"),
    ("obgyn", "OBGYN"),
    ("ent", "ENT"),
    ("dme", "DME"),
    ("emr", "EMR"),
    ("ehr", "EHR"),
    ("cpt", "CPT"),
    ("icd", "ICD"),
    ("ar", "A/R"),
    ("mips", "MIPS"),
    ("hipaa", "HIPAA"),
];

/// Title-case a slug: `"novel-service"` -> `"Novel Service"`. Known acronyms
/// keep their marketing-copy casing (`"cpt-codes"` -> `"CPT Codes"`).
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            if let Some((_, acronym)) = ACRONYMS.iter().find(|(plain, _)| *plain == w) {
                return (*acronym).to_string();
            }
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn lookup(table: &[(&str, &str, &str)], slug: &str) -> Option<RouteMeta> {
    table.iter().find(|(s, _, _)| *s == slug).map(|(_, t, d)| RouteMeta {
        title: (*t).to_string(),
        description: (*d).to_string(),
    })
}

/// Metadata for a service slug, falling back to generated text for slugs
/// not present in the table.
pub fn service_meta(slug: &str) -> RouteMeta {
    lookup(SERVICES, slug).unwrap_or_else(|| {
        let name = title_case_slug(slug);
        RouteMeta {
            title: format!("{name} Services | Medical Billing Solutions | Medtransic"),
            description: format!(
                "Professional {name} services for medical practices. Reduce denials, accelerate reimbursements, and grow revenue with Medtransic."
            ),
        }
    })
}

/// Metadata for a specialty slug, with the same fallback rule.
pub fn specialty_meta(slug: &str) -> RouteMeta {
    lookup(SPECIALTIES, slug).unwrap_or_else(|| {
        let name = title_case_slug(slug);
        RouteMeta {
            title: format!("{name} Medical Billing Services | Medtransic"),
            description: format!(
                "Specialized {name} medical billing from certified coders who know your specialty's payer rules inside out."
            ),
        }
    })
}
