//! Hard-coded site content.

use crate::types::content::{Certification, Profile, Skill};

pub const PROFILE: Profile = Profile {
    first_name: "Manobala",
    initial: "S",
    role_tag: "Software Engineer (Aspiring)",
    headline: "Aspiring Software Engineer",
    summary: "I’m an Integrated M.Tech Software Engineering student at VIT Vellore (CGPA 8.4, batch 2027), \
building modern web applications with React, JavaScript, and strong fundamentals in software engineering.",
    resume_url: "https://drive.google.com/file/d/1B0HVAnI4L3NdmkFU4xEfrdl2oFekNOgW/view?usp=share_link",
    location: "Gudiyatham, Vellore – 632602",
    phone: "9626488199",
    email: "shankarmanogym@gmail.com",
    github_url: "https://github.com/Mano-8055",
    github_label: "github.com/Mano-8055",
    education: "Integrated M.Tech in Software Engineering",
    education_detail: "VIT Vellore • CGPA: 8.4 • Graduation: 2027",
};

pub const SKILLS: [Skill; 5] = [
    Skill {
        category: "Programming Languages",
        items: "Python, Java",
    },
    Skill {
        category: "Web Development",
        items: "HTML, CSS, JavaScript, React, PHP",
    },
    Skill {
        category: "Databases",
        items: "MySQL, MongoDB",
    },
    Skill {
        category: "Tools",
        items: "Git, VS Code, Figma",
    },
    Skill {
        category: "Soft Skills",
        items: "Communication, Teamwork",
    },
];

pub const CERTIFICATIONS: [Certification; 2] = [
    Certification {
        title: "Fundamentals of Deep Learning – NVIDIA",
        issued_date: "September 22, 2025",
        identifiers: &["TOt4sbDURj-z5dlIvsIlNQ", "1tO0Ys3ITkGJkXM3sgBKrQ"],
        certificate_url: "https://drive.google.com/file/d/179mDybl6HvDQ857jLs_Usb1ZiGevphRA/view?usp=drivesdk",
    },
    Certification {
        title: "Learn React - SCRIMBA",
        issued_date: "February 04, 2026",
        identifiers: &["VTLO18RT2L44"],
        certificate_url: "https://drive.google.com/file/d/1DUIXY6gv35V4ttmdETDOSv7lE3_ir5hx/view?usp=drivesdk",
    },
];
