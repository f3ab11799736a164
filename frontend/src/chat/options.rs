/// Services the agency offers. The chat lists them under "Know about services".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    WebDevelopment,
    UiUxDesign,
    SocialMediaMarketing,
    DataAnalytics,
    Seo,
    LongTermPartnership,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::WebDevelopment,
        Service::UiUxDesign,
        Service::SocialMediaMarketing,
        Service::DataAnalytics,
        Service::Seo,
        Service::LongTermPartnership,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Service::WebDevelopment => "Web Development",
            Service::UiUxDesign => "UI/UX Design",
            Service::SocialMediaMarketing => "Social Media Marketing",
            Service::DataAnalytics => "Data Analytics",
            Service::Seo => "SEO",
            Service::LongTermPartnership => "Long-term Partnership",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Service::WebDevelopment => "🌐 We build responsive, scalable, and secure websites using modern tech stacks.",
            Service::UiUxDesign => "🎨 We craft beautiful, user-friendly designs focused on great experiences.",
            Service::SocialMediaMarketing => "📢 We create campaigns that boost your online presence and drive engagement.",
            Service::DataAnalytics => "📊 We analyze your business data to provide insights and smarter decisions.",
            Service::Seo => "🔍 We optimize your site to rank higher on Google and attract more visitors.",
            Service::LongTermPartnership => "🤝 We offer ongoing support, updates, and improvements after deployment.",
        }
    }
}

/// Every label the chat widget can ever show as a clickable choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatOption {
    KnowServices,
    Service(Service),
    AboutCompany,
    WhyChooseUs,
    ContactUs,
    StartProject,
    RequestProject,
    TalkToHuman,
    GoBack,
}

impl ChatOption {
    pub fn label(self) -> &'static str {
        match self {
            ChatOption::KnowServices => "Know about services",
            ChatOption::Service(service) => service.label(),
            ChatOption::AboutCompany => "About company",
            ChatOption::WhyChooseUs => "Why choose you?",
            ChatOption::ContactUs => "Contact us",
            ChatOption::StartProject => "Start a project",
            ChatOption::RequestProject => "Request a project/partnership",
            ChatOption::TalkToHuman => "Talk to a human",
            ChatOption::GoBack => "Go back",
        }
    }

    pub fn from_label(label: &str) -> Option<ChatOption> {
        let option = match label {
            "Know about services" => ChatOption::KnowServices,
            "About company" => ChatOption::AboutCompany,
            "Why choose you?" => ChatOption::WhyChooseUs,
            "Contact us" => ChatOption::ContactUs,
            "Start a project" => ChatOption::StartProject,
            "Request a project/partnership" => ChatOption::RequestProject,
            "Talk to a human" => ChatOption::TalkToHuman,
            "Go back" => ChatOption::GoBack,
            other => {
                return Service::ALL
                    .into_iter()
                    .find(|service| service.label() == other)
                    .map(ChatOption::Service)
            }
        };
        Some(option)
    }
}

pub fn root_menu() -> Vec<ChatOption> {
    vec![
        ChatOption::KnowServices,
        ChatOption::AboutCompany,
        ChatOption::ContactUs,
        ChatOption::RequestProject,
        ChatOption::TalkToHuman,
    ]
}

pub fn services_menu() -> Vec<ChatOption> {
    let mut menu: Vec<ChatOption> = Service::ALL.into_iter().map(ChatOption::Service).collect();
    menu.push(ChatOption::GoBack);
    menu
}

/// Shorter list offered after "Request a project/partnership".
pub fn project_menu() -> Vec<ChatOption> {
    vec![
        ChatOption::Service(Service::WebDevelopment),
        ChatOption::Service(Service::UiUxDesign),
        ChatOption::Service(Service::SocialMediaMarketing),
        ChatOption::GoBack,
    ]
}
