// Static copy for the landing page sections.

pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Work {
    pub title: &'static str,
    pub image: &'static str,
    pub desc: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub desc: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct BlogPost {
    pub title: &'static str,
    pub image: &'static str,
    pub desc: &'static str,
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "💻",
        title: "Website Development",
        desc: "Custom, modern, and responsive websites tailored to your business needs.",
    },
    ServiceCard {
        icon: "🛒",
        title: "E-Commerce Solutions",
        desc: "Build powerful online stores with secure payments and smooth user experience.",
    },
    ServiceCard {
        icon: "📢",
        title: "Digital Marketing",
        desc: "From SEO to Social Media, we ensure your brand reaches the right audience.",
    },
    ServiceCard {
        icon: "🎨",
        title: "UI/UX Design",
        desc: "Intuitive and user-friendly interfaces focused on enhancing user experience and engagement.",
    },
    ServiceCard {
        icon: "⚙️",
        title: "Software & IT Solutions",
        desc: "Smart, scalable, and business-driven technology solutions for growth.",
    },
    ServiceCard {
        icon: "🛡️",
        title: "Security & Support",
        desc: "Reliable, secure, and ongoing IT support for modern businesses.",
    },
];

pub const PARTNERS: &[&str] = &["MET College", "Thread Haus Co", "FurniStyle", "CertiGen", "MindWell"];

pub const WORKS: &[Work] = &[
    Work {
        title: "PhishScan — AI-Based Phishing Detection System",
        image: "/projects/img7.png",
        desc: "AI-powered phishing detection that correlates sender details, embedded URLs, headers, attachments and body text to catch phishing, spoofing and social engineering.",
    },
    Work {
        title: "MET College Leave Management System",
        image: "/projects/img3.jpeg",
        desc: "College management for MET College, Nashik: student and faculty management, attendance, exam results and automated alerts.",
    },
    Work {
        title: "MindWell — AI-Powered Wellness Tracker",
        image: "/projects/img4.png",
        desc: "Monitors daily habits, provides health insights and suggests personalized improvements for lifestyle balance.",
    },
    Work {
        title: "CertiGen — Automated Certificate Generator",
        image: "/projects/img5.png",
        desc: "Generate professional certificates instantly with a responsive design and real-time preview.",
    },
    Work {
        title: "FurniStyle — Modern Furniture E-Commerce",
        image: "/projects/img1.png",
        desc: "Responsive furniture store with product filters, checkout flow and a seamless UI.",
    },
    Work {
        title: "Thread Haus — E-Commerce & Brand Experience",
        image: "/projects/img6.png",
        desc: "Custom store for sustainable fashion with dynamic collections and storytelling design.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Om Shinde",
        role: "Founder & Full Stack Developer",
        desc: "Leads OmRadix Solutions with a vision for innovation. Expert in full-stack development, AI integration, and scalable systems.",
    },
    TeamMember {
        name: "Vijay Kalantre",
        role: "Co-Founder, UI/UX & Marketing",
        desc: "Brings ideas to life with creative UI/UX design and impactful marketing strategies.",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What Is Your Hourly Rate?",
        answer: "Our rates depend on the project’s scope, complexity, and required expertise. We offer hourly and fixed-price packages to suit client needs.",
    },
    Faq {
        question: "What Type Of Projects Do You Take On?",
        answer: "Web Development, Mobile Applications, AI-powered solutions, and Digital Marketing. From a startup idea to enterprise-grade systems, we handle end-to-end development.",
    },
    Faq {
        question: "How Do You Charge For Projects?",
        answer: "Fixed price for well-defined projects; hourly or monthly retainer for ongoing or evolving requirements.",
    },
    Faq {
        question: "What Time-Zone Do You Work In?",
        answer: "We operate primarily in IST, and regularly collaborate with clients across the US, Europe, and other time zones.",
    },
    Faq {
        question: "Who Is The Founder Of Omradix Solutions?",
        answer: "Om Shinde is the Founder and Vijay Kalantre is the Co-Founder of Omradix Solutions.",
    },
    Faq {
        question: "Do You Offer Ongoing Support After Project Delivery?",
        answer: "Yes! After deployment we provide maintenance, updates, and continuous support.",
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Artificial Intelligence: The Future of Smarter Businesses",
        image: "/blogs/blog1.jpeg",
        desc: "How businesses can leverage AI to automate workflows, reduce costs, and scale smarter.",
    },
    BlogPost {
        title: "Why Good Design Builds Trust",
        image: "/blogs/blog2.jpeg",
        desc: "Why clean, user-centric UI/UX design plays a crucial role in building trust and driving conversions.",
    },
    BlogPost {
        title: "Scaling Businesses with Cloud Technology",
        image: "/blogs/blog3.jpeg",
        desc: "How cloud hosting, databases, and applications bring flexibility, security, and efficiency.",
    },
    BlogPost {
        title: "Why Mobile-First is the Future",
        image: "/blogs/blog4.jpeg",
        desc: "With most users browsing on mobile, responsive sites and apps help businesses reach customers anywhere.",
    },
];
