//! Static biography content rendered around the project grid.

pub const OWNER_NAME: &str = "Tejas Jagadale";
pub const OWNER_INITIALS: &str = "TJ";
pub const ROLE_BADGE: &str = "Full Stack Developer";
pub const EMAIL_URI: &str = "mailto:tejasjagadale43@gmail.com";
pub const LINKEDIN_URI: &str = "https://www.linkedin.com/in/tejasjagadale43";

/// Served next to the bundle; the page only links to it.
pub const RESUME_URI: &str = "/pdf/TejasResume.pdf";

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

pub const QUICK_STATS: [(&str, &str); 3] = [
    ("1.6+", "yrs experience"),
    ("5+", "shipped apps"),
    ("90%", "efficiency gains"),
];

pub const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    ("⚡", "Full Stack:", "Proficient in both front-end and back-end development"),
    ("🧠", "AI Integration:", "Experience with Vision AI and Gen AI"),
    ("☁️", "Cloud Platforms:", "AWS and GCP experience"),
    ("📈", "Impact:", "90% reduction in manual efforts"),
];

pub const ABOUT: &str = "Full Stack Web Developer with 1.6 years of experience in developing \
user-friendly, responsive web applications. Proficient in front-end technologies like \
JavaScript, React, HTML5, CSS3 as well as back-end frameworks such as Node.js.";

pub const ABOUT_PILLS: [&str; 8] = [
    "React", "Node.js", "JavaScript", "HTML5", "CSS3", "AWS", "GCP", "REST APIs",
];

pub const STRENGTHS: [&str; 4] = [
    "Automation solutions that reduce manual effort",
    "Responsive and user-friendly UI development",
    "Cost optimization through cloud resource management",
    "Integration of third-party libraries and APIs",
];

pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub rising: bool,
}

pub const METRICS: [Metric; 2] = [
    Metric {
        value: "90%",
        label: "Efficiency gain",
        rising: true,
    },
    Metric {
        value: "200%",
        label: "Cost reduction",
        rising: false,
    },
];

pub struct Job {
    pub role: &'static str,
    pub org: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

pub const EXPERIENCE: [Job; 2] = [
    Job {
        role: "Front End Developer",
        org: "MPeoples Business Solution Pvt Ltd",
        period: "Feb 2025 — Present",
        points: &[
            "Developed Responsive and User Friendly Websites using React.js, Next.js, and CSS",
            "Maintaining the website which includes updates, changes and improvements",
        ],
    },
    Job {
        role: "Full Stack Developer",
        org: "OneIntegral Technologies Pvt Ltd",
        period: "Oct 2023 — Dec 2024",
        points: &[
            "Implemented automated email functionality reducing manual efforts by 90%",
            "Maintained admin panel to manage system configurations and user roles",
            "Optimized AWS resources reducing costs by over 200%",
            "Developed Data Extraction system using Node.js, Vision AI and Gen AI",
        ],
    },
];

/// Skill name and self-assessed level in percent.
pub const SKILLS: [(&str, u8); 4] = [
    ("ReactJS / NextJS", 85),
    ("Node.js / API Design", 80),
    ("JavaScript", 90),
    ("HTML / CSS", 95),
];

pub const TOOLS: [&str; 6] = ["VS Code", "Postman", "JIRA", "BitBucket", "WinSCP", "PuTTY"];

pub const LANGUAGES: [&str; 4] = [
    "English (Fluent)",
    "Tamil (Fluent)",
    "Marathi (Fluent)",
    "Hindi (Proficient)",
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "B.E - Electronics and Communication Engineering",
    school: "Sona College of Technology",
    period: "Sep 2017 - Oct 2021",
};

pub struct Certification {
    pub name: &'static str,
    pub certificate_uri: Option<&'static str>,
}

pub const CERTIFICATIONS: [Certification; 3] = [
    Certification {
        name: "Full Stack Web Development - Edureka",
        certificate_uri: Some("/pdf/fsdcertificate.pdf"),
    },
    Certification {
        name: "Ultimate AWS Certified Solutions Architect Associate SAA-C03 - Udemy",
        certificate_uri: None,
    },
    Certification {
        name: "Responsive Web Design Essentials - CSS, Bootstrap, Javascript, Web Development Course - Udemy",
        certificate_uri: Some("/pdf/udemy.pdf"),
    },
];

pub const HOBBIES: [&str; 3] = ["Singing", "Listening to Music", "Watching Movies"];

pub const CONTACT_BLURB: &str = "Let's discuss how I can help bring your web application ideas \
to life with modern technologies and efficient solutions.";

/// Footer links: CSS class, accessible label, URI.
pub const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    (
        "linkedin",
        "LinkedIn",
        "https://www.linkedin.com/in/tejas-jagadale43",
    ),
    ("youtube", "YouTube", "https://youtube.com/@tejasjagdale"),
    ("instagram", "Instagram", "https://www.instagram.com/tejas__verse"),
    ("twitter", "X", "https://x.com/TejasJagad83787"),
];

pub const PALETTE_PLACEHOLDER: &str =
    "Type a command… (e.g., 'Go to projects', 'Toggle dark', 'Download resume')";

pub const PALETTE_HINTS: [&str; 3] = ["Go to projects", "Toggle dark", "Download resume"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{interpret, PaletteEffect};
    use pretty_assertions::assert_eq;

    #[test]
    fn every_palette_hint_is_a_working_command() {
        let effects: Vec<Vec<PaletteEffect>> =
            PALETTE_HINTS.iter().map(|hint| interpret(hint)).collect();

        assert_eq!(
            effects,
            vec![
                vec![PaletteEffect::ScrollToProjects],
                vec![PaletteEffect::ToggleTheme],
                vec![PaletteEffect::ResumeNotice],
            ]
        );
    }

    #[test]
    fn nav_links_are_in_document_anchors() {
        assert!(NAV_LINKS
            .iter()
            .all(|(href, _)| href.starts_with('#') && href.len() > 1));
    }
}
