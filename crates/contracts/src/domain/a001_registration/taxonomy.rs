//! Static Profession → Category → Sub Category lookup tables.
//!
//! Lookups never fail: an empty or unrecognised key yields an empty slice.

use crate::enums::profession::Profession;
use once_cell::sync::Lazy;
use std::collections::HashMap;

impl Profession {
    /// Categories offered for this profession, in display order
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Profession::Doctor => &["General Practitioner", "Specialist", "Surgeon"],
            Profession::Lawyer => &["Corporate Law", "Criminal Law", "Family Law"],
            Profession::Engineer => &["Software", "Civil", "Mechanical"],
            Profession::Teacher => &[
                "Primary Education",
                "Secondary Education",
                "Higher Education",
            ],
            Profession::Accountant => &["Tax Accounting", "Audit", "Financial Planning"],
            Profession::Consultant => &[
                "Business Consultant",
                "IT Consultant",
                "Management Consultant",
            ],
            Profession::Designer => &["Graphic Designer", "Interior Designer", "Web Designer"],
            Profession::Developer => &[
                "Frontend Developer",
                "Backend Developer",
                "Full Stack Developer",
            ],
        }
    }
}

// ─── Sub categories ─────────────────────────────────────────────────────────

static SUB_CATEGORIES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: [(&'static str, &'static [&'static str]); 24] = [
        // Doctor
        (
            "General Practitioner",
            &["Family Medicine", "Internal Medicine", "Preventive Medicine"],
        ),
        (
            "Specialist",
            &[
                "Cardiology",
                "Neurology",
                "Dermatology",
                "Psychiatry",
                "Oncology",
                "Endocrinology",
            ],
        ),
        (
            "Surgeon",
            &[
                "General Surgery",
                "Orthopedic Surgery",
                "Cardiac Surgery",
                "Plastic Surgery",
                "Neurosurgery",
            ],
        ),
        // Lawyer
        (
            "Corporate Law",
            &[
                "Mergers & Acquisitions",
                "Securities Law",
                "Corporate Compliance",
                "Contract Law",
            ],
        ),
        (
            "Criminal Law",
            &[
                "Defense Attorney",
                "Prosecutor",
                "DUI Defense",
                "White Collar Crime",
            ],
        ),
        (
            "Family Law",
            &["Divorce Law", "Child Custody", "Adoption", "Domestic Relations"],
        ),
        // Engineer
        (
            "Software",
            &[
                "Web Development",
                "Mobile Apps",
                "AI/ML",
                "DevOps",
                "Cybersecurity",
            ],
        ),
        (
            "Civil",
            &[
                "Construction",
                "Infrastructure",
                "Environmental",
                "Transportation",
                "Water Resources",
            ],
        ),
        (
            "Mechanical",
            &[
                "Automotive",
                "Manufacturing",
                "HVAC",
                "Aerospace",
                "Robotics",
            ],
        ),
        // Teacher
        (
            "Primary Education",
            &[
                "Kindergarten",
                "Elementary (K-5)",
                "Special Education",
                "ESL Teaching",
            ],
        ),
        (
            "Secondary Education",
            &[
                "Middle School (6-8)",
                "High School (9-12)",
                "Subject Specialist",
                "School Counseling",
            ],
        ),
        (
            "Higher Education",
            &[
                "University Professor",
                "Community College",
                "Research",
                "Academic Administration",
            ],
        ),
        // Accountant
        (
            "Tax Accounting",
            &[
                "Individual Tax",
                "Corporate Tax",
                "Tax Planning",
                "Tax Resolution",
            ],
        ),
        (
            "Audit",
            &[
                "External Audit",
                "Internal Audit",
                "Forensic Accounting",
                "Compliance Audit",
            ],
        ),
        (
            "Financial Planning",
            &[
                "Personal Finance",
                "Investment Advisory",
                "Retirement Planning",
                "Estate Planning",
            ],
        ),
        // Consultant
        (
            "Business Consultant",
            &[
                "Strategy Consulting",
                "Operations Consulting",
                "Process Improvement",
                "Change Management",
            ],
        ),
        (
            "IT Consultant",
            &[
                "Systems Integration",
                "Cloud Migration",
                "Digital Transformation",
                "IT Security",
            ],
        ),
        (
            "Management Consultant",
            &[
                "Leadership Development",
                "Organizational Design",
                "Performance Management",
                "HR Consulting",
            ],
        ),
        // Designer
        (
            "Graphic Designer",
            &[
                "Brand Design",
                "Print Design",
                "Digital Design",
                "Packaging Design",
            ],
        ),
        (
            "Interior Designer",
            &[
                "Residential Design",
                "Commercial Design",
                "Space Planning",
                "Furniture Design",
            ],
        ),
        (
            "Web Designer",
            &[
                "UI/UX Design",
                "Responsive Design",
                "E-commerce Design",
                "Landing Page Design",
            ],
        ),
        // Developer
        (
            "Frontend Developer",
            &[
                "React Development",
                "Vue.js Development",
                "Angular Development",
                "Mobile UI Development",
            ],
        ),
        (
            "Backend Developer",
            &[
                "API Development",
                "Database Design",
                "Server Architecture",
                "Microservices",
            ],
        ),
        (
            "Full Stack Developer",
            &[
                "MEAN Stack",
                "MERN Stack",
                "Django Development",
                "Laravel Development",
            ],
        ),
    ];
    entries.into_iter().collect()
});

/// Category options for a profession label.
pub fn options_for(profession: &str) -> &'static [&'static str] {
    Profession::from_label(profession)
        .map(|p| p.categories())
        .unwrap_or(&[])
}

/// Sub-category options for a category label.
pub fn sub_options_for(category: &str) -> &'static [&'static str] {
    SUB_CATEGORIES.get(category).copied().unwrap_or(&[])
}
