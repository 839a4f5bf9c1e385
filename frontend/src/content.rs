// Static copy and data for the portfolio sections.

pub const OWNER_NAME: &str = "Ali Haider";
pub const OWNER_TITLE: &str = "Full-Stack Developer";
pub const HERO_PITCH: &str = "I build scalable, accessible, and pixel-perfect digital experiences across the web. \
    Passionate about crafting thoughtful interfaces and robust back-end systems, I blend design with engineering \
    to deliver end-to-end solutions that truly work.";

pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Ali_Haider_FullStack_Developer_Resume.pdf";
pub const PROFILE_IMAGE_PATH: &str = "/profile.png";

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon_class: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", href: "https://github.com/Alihaider592", icon_class: "icon-github" },
    SocialLink { name: "LinkedIn", href: "https://www.linkedin.com/in/ali-haider-719451378/", icon_class: "icon-linkedin" },
    SocialLink { name: "Email", href: "mailto:alicoder592@gmail.com", icon_class: "icon-mail" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Full Stack Developer with a strong eye for detail and a love for creating seamless, \
     efficient web applications. My journey in web development began with curiosity about how websites \
     function and has grown into a career focused on building accessible, performant, and scalable solutions.",
    "I specialize in modern web stacks, with extensive experience in React, Next.js, Node.js, MongoDB, and \
     TypeScript. I believe in writing clean, maintainable code and staying up-to-date with the latest \
     technologies, design patterns, and best practices.",
    "Beyond coding, I enjoy exploring new design and development trends, contributing to open-source \
     projects, and sharing knowledge with the developer community.",
];

/// A labelled progress bar in the About section.
pub struct SkillBar {
    pub name: &'static str,
    pub level_label: &'static str,
    pub percent: u8,
    pub delay_ms: u32,
}

pub const ABOUT_SKILL_COLUMNS: [&[SkillBar]; 2] = [
    &[
        SkillBar { name: "HTML & CSS", level_label: "Expert", percent: 95, delay_ms: 1000 },
        SkillBar { name: "JavaScript", level_label: "Expert", percent: 90, delay_ms: 1200 },
        SkillBar { name: "TypeScript", level_label: "Advanced", percent: 85, delay_ms: 1400 },
    ],
    &[
        SkillBar { name: "React", level_label: "Expert", percent: 92, delay_ms: 1600 },
        SkillBar { name: "Next.js", level_label: "Advanced", percent: 88, delay_ms: 1800 },
        SkillBar { name: "Tailwind CSS", level_label: "Expert", percent: 94, delay_ms: 2000 },
    ],
];

pub const EXPERIENCE_HIGHLIGHTS: &[&str] = &[
    "1+ year of professional Full-Stack development",
    "3+ successful project deliveries",
    "Strong focus on accessibility and performance",
    "Active contributor to open-source projects",
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Technologies",
        skills: &[
            Skill { name: "HTML5", level: 95 },
            Skill { name: "CSS3", level: 92 },
            Skill { name: "JavaScript (ES6+)", level: 90 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "React.js", level: 92 },
            Skill { name: "Next.js", level: 88 },
        ],
    },
    SkillCategory {
        title: "Backend Technologies",
        skills: &[
            Skill { name: "Node.js", level: 88 },
            Skill { name: "Express.js", level: 85 },
            Skill { name: "RESTful APIs", level: 90 },
            Skill { name: "Authentication (JWT)", level: 85 },
            Skill { name: "GraphQL (Basics)", level: 70 },
        ],
    },
    SkillCategory {
        title: "Styling & Design",
        skills: &[
            Skill { name: "Tailwind CSS", level: 94 },
            Skill { name: "Sass/SCSS", level: 80 },
            Skill { name: "CSS Modules", level: 78 },
            Skill { name: "Figma", level: 68 },
        ],
    },
    SkillCategory {
        title: "Tools & Workflow",
        skills: &[
            Skill { name: "Git & GitHub", level: 90 },
            Skill { name: "Vite", level: 82 },
            Skill { name: "Webpack", level: 70 },
            Skill { name: "ESLint & Prettier", level: 88 },
        ],
    },
    SkillCategory {
        title: "Deployment & DevOps",
        skills: &[
            Skill { name: "Vercel", level: 92 },
            Skill { name: "CI/CD (GitHub Actions)", level: 75 },
            Skill { name: "Linux / CLI", level: 80 },
        ],
    },
    SkillCategory {
        title: "Databases & ORMs",
        skills: &[
            Skill { name: "MongoDB", level: 86 },
            Skill { name: "Mongoose", level: 84 },
        ],
    },
];

pub const ADDITIONAL_SKILLS: &[&str] = &[
    "Responsive Web Design",
    "Web Accessibility (a11y)",
    "Performance Optimization",
    "SEO Best Practices",
    "Progressive Web Apps",
    "State Management",
    "Agile & Scrum",
    "Cross-browser Testing",
    "Mobile-first Development",
];

pub const SUMMARY_STATS: &[(&str, &str)] = &[
    ("1+", "year Experience"),
    ("15+", "Technologies Mastered"),
    ("5+", "Projects Completed"),
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Dashboard",
        description: "A comprehensive admin dashboard for managing products, orders, and analytics, \
            with real-time data updates.",
        image: Some("/images/ecommerce-dashboard.jpg"),
        tech: &["React", "TypeScript", "Tailwind CSS", "Chart.js"],
        live_url: "https://dashboard-demo.vercel.app",
        github_url: "https://github.com/Alihaider592/ecommerce-dashboard",
        featured: true,
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task manager with drag-and-drop boards, team features, and \
            real-time updates.",
        image: Some("/images/task-app.jpg"),
        tech: &["Next.js", "React", "Prisma", "PostgreSQL"],
        live_url: "https://taskapp-demo.vercel.app",
        github_url: "https://github.com/Alihaider592/task-management",
        featured: true,
    },
    Project {
        title: "Weather Forecast App",
        description: "Location-based forecasts with interactive maps and detailed weather analytics.",
        image: Some("/images/weather-app.jpg"),
        tech: &["React", "OpenWeather API", "Mapbox", "CSS Modules"],
        live_url: "https://weather-demo.vercel.app",
        github_url: "https://github.com/Alihaider592/weather-app",
        featured: false,
    },
    Project {
        title: "Portfolio Website",
        description: "This site: scroll-triggered reveals and a contact form relayed by email.",
        image: None,
        tech: &["Rust", "Yew", "Axum"],
        live_url: "/",
        github_url: "https://github.com/Alihaider592/portfolio",
        featured: false,
    },
    Project {
        title: "Recipe Finder",
        description: "Recipe discovery with advanced search filters, meal planning, and nutrition info.",
        image: Some("/images/recipe-app.jpg"),
        tech: &["React", "Node.js", "MongoDB", "Express"],
        live_url: "https://recipes-demo.vercel.app",
        github_url: "https://github.com/Alihaider592/recipe-finder",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        let bars = ABOUT_SKILL_COLUMNS.iter().flat_map(|column| column.iter()).map(|bar| bar.percent);
        let skills = SKILL_CATEGORIES.iter().flat_map(|c| c.skills.iter()).map(|s| s.level);
        assert!(bars.chain(skills).all(|level| level <= 100));
    }

    #[test]
    fn featured_projects_come_first() {
        let first_regular = PROJECTS.iter().position(|p| !p.featured).unwrap_or(PROJECTS.len());
        assert!(PROJECTS[first_regular..].iter().all(|p| !p.featured));
    }
}
