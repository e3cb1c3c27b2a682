//! Static site content: projects, skills, work history and contact details.
//!
//! Everything here is compiled into the binary and never mutated, so the
//! views borrow from these tables directly.

use std::fmt;

/// Sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Label shown in the navigation.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub year: &'static str,
    pub image: &'static str,
    pub images: &'static [&'static str],
    pub github: &'static str,
    pub live_url: &'static str,
    pub tech: &'static [&'static str],
}

impl Project {
    /// Public repository link, if the project has one. `#` marks a private repo.
    pub fn github_url(&self) -> Option<&'static str> {
        match self.github {
            "" | "#" => None,
            url => Some(url),
        }
    }

    /// Short tech line shown under a project card.
    /// Carousel slide `i`, or `None` past the last image.
    pub fn slide(&self, i: usize) -> Option<&'static str> {
        self.images.get(i).copied()
    }

    pub fn tech_preview(&self) -> String {
        self.tech
            .iter()
            .take(2)
            .copied()
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

/// Flattened `(category, skill)` pairs in display order.
pub fn marquee_items() -> impl Iterator<Item = (&'static str, &'static Skill)> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|c| c.skills.iter().map(move |s| (c.title, s)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub socials: &'static [SocialLink],
}

pub const OWNER: &str = "Humayun Raza";
pub const ROLES: &str = "FRONT END DEVELOPER | FULL STACK DEVELOPER | FREELANCE DEVELOPER";
pub const ACTIVE_YEARS: &str = "2020 - 2024";

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Heuser PK | Educational Platform",
        description: "A landing page for an educational institute with a focus on user experience",
        long_description: "Designed and developed a comprehensive landing page for Heuser PK, an educational institute focused on providing quality learning experiences. The platform features an intuitive interface, responsive design, and seamless navigation to enhance user engagement and information accessibility.",
        year: "2023",
        image: "/images/heuser.webp",
        images: &["/images/heuser.webp"],
        github: "#",
        live_url: "https://heuserpk.com",
        tech: &["Next.Js", "MongoDB", "Tailwind CSS"],
    },
    Project {
        id: 2,
        title: "RecruitWise | AI Recruitment Platform",
        description: "An AI-powered recruitment platform that matches candidates with job openings",
        long_description: "RecruitWise is an innovative AI-driven recruitment solution that streamlines the hiring process by intelligently matching candidates with suitable job positions. The platform analyzes candidate profiles and job requirements to suggest optimal matches, saving time and improving recruitment outcomes.",
        year: "Ongoing",
        image: "/images/recruitwise.webp",
        images: &["/images/recruitwise.webp"],
        github: "#",
        live_url: "https://recruitwise-frontend.vercel.app/",
        tech: &["ReactJS", "MongoDB", "Context API"],
    },
    Project {
        id: 3,
        title: "Azzy's Hardware | E-commerce Store",
        description: "An e-commerce platform for hardware products with a user-friendly interface",
        long_description: "Azzy's Hardware is a full-featured e-commerce platform specializing in hardware products. The store offers a comprehensive shopping experience with product browsing, category filtering, cart management, secure checkout, and order tracking capabilities.",
        year: "Ongoing",
        image: "/images/azzyshardware.webp",
        images: &["/images/azzyshardware.webp"],
        github: "https://github.com/humayunraza1/ReactJS-E-commerce-Store",
        live_url: "https://azzyshardware.store",
        tech: &["ReactJS", "Node.js", "Express", "Tailwind CSS", "Context API"],
    },
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "ReactJS", image: "/images/React.png" },
            Skill { name: "JavaScript", image: "/images/js.webp" },
            Skill { name: "HTML", image: "/images/html.png" },
            Skill { name: "Tailwind CSS", image: "/images/tailwind.png" },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Node.js", image: "/images/node.jpg" },
            Skill { name: "Express", image: "/images/express.png" },
            Skill { name: "MongoDB", image: "/images/MongoDB.png" },
        ],
    },
    SkillCategory {
        title: "Tools & Others",
        skills: &[
            Skill { name: "Git", image: "/images/git.png" },
            Skill { name: "Docker", image: "/images/docker.jpg" },
            Skill { name: "AWS", image: "/images/aws.jpeg" },
            Skill { name: "Azure", image: "/images/azure.png" },
        ],
    },
];

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Senior Frontend Developer",
        company: "Tech Innovations Inc.",
        period: "2022 - Present",
        description: "Led the development of the company's main SaaS product, improving performance by 40%. Managed a team of 4 developers and implemented CI/CD pipelines.",
    },
    Experience {
        title: "Frontend Developer",
        company: "Digital Solutions Ltd.",
        period: "2020 - 2022",
        description: "Developed responsive web applications using React and TypeScript. Collaborated with UX designers to implement new features and improve user experience.",
    },
    Experience {
        title: "Junior Web Developer",
        company: "Creative Web Agency",
        period: "2018 - 2020",
        description: "Built and maintained websites for various clients using HTML, CSS, JavaScript and WordPress. Participated in client meetings and requirement gathering.",
    },
];

pub static CONTACT: ContactDetails = ContactDetails {
    email: "humayunraza.dev@gmail.com",
    phone: "+(92)316-1278341",
    location: "Karachi, Pakistan",
    socials: &[
        SocialLink {
            label: "GitHub Profile",
            href: "https://github.com/humayunraza1",
            icon: "devicon-github-plain",
        },
        SocialLink {
            label: "LinkedIn Profile",
            href: "https://www.linkedin.com/in/humayun-raza/",
            icon: "devicon-linkedin-plain",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_in_document_order() {
        for (i, s) in Section::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        assert_eq!(Section::Projects.id(), "projects");
        assert_eq!(Section::Contact.to_string(), "Contact");
    }

    #[test]
    fn hash_github_is_hidden() {
        let heuser = find_project(1).expect("project 1 exists");
        assert_eq!(heuser.github_url(), None);

        let azzy = find_project(3).expect("project 3 exists");
        assert_eq!(
            azzy.github_url(),
            Some("https://github.com/humayunraza1/ReactJS-E-commerce-Store")
        );
    }

    #[test]
    fn tech_preview_takes_two_labels() {
        let azzy = find_project(3).unwrap();
        assert_eq!(azzy.tech_preview(), "ReactJS • Node.js");
    }

    #[test]
    fn slide_past_the_end_is_none() {
        for p in PROJECTS {
            assert_eq!(p.slide(0), Some(p.images[0]));
            assert_eq!(p.slide(p.images.len()), None);
        }
    }

    #[test]
    fn unknown_project_id() {
        assert!(find_project(42).is_none());
    }

    #[test]
    fn every_project_has_images() {
        let mut ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
        for p in PROJECTS {
            assert!(!p.images.is_empty(), "{} has no images", p.title);
            assert!(p.images.contains(&p.image));
        }
    }

    #[test]
    fn marquee_flattens_categories() {
        let items = marquee_items().collect::<Vec<_>>();
        assert_eq!(items.len(), 11);
        assert_eq!(items[0].0, "Frontend");
        assert_eq!(items[0].1.name, "ReactJS");
        assert_eq!(items[10], ("Tools & Others", &SKILL_CATEGORIES[2].skills[3]));
    }
}
