//! Static option catalogs offered by the wizard.
//!
//! Catalogs are immutable for the process lifetime; the input model holds
//! `&'static` references into them.

use std::fmt;

/// Common read-only view over catalog entries.
pub trait CatalogEntry: 'static {
    fn id(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Opaque icon reference, resolved only by a presentation layer.
    fn icon_ref(&self) -> &'static str;
}

/// Professional role the LLM is asked to adopt.
#[derive(Debug, PartialEq, Eq)]
pub struct PersonaOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon_ref: &'static str,
}

/// Tangible output format the user ultimately wants.
#[derive(Debug, PartialEq, Eq)]
pub struct GoalOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon_ref: &'static str,
}

macro_rules! impl_catalog_entry {
    ($ty:ty) => {
        impl CatalogEntry for $ty {
            fn id(&self) -> &'static str {
                self.id
            }
            fn label(&self) -> &'static str {
                self.label
            }
            fn description(&self) -> &'static str {
                self.description
            }
            fn icon_ref(&self) -> &'static str {
                self.icon_ref
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label)
            }
        }
    };
}

impl_catalog_entry!(PersonaOption);
impl_catalog_entry!(GoalOption);

pub static PERSONAS: &[PersonaOption] = &[
    PersonaOption {
        id: "copywriter",
        label: "Copywriter Senior",
        description: "Especialista em textos persuasivos e conversão.",
        icon_ref: "PenTool",
    },
    PersonaOption {
        id: "developer",
        label: "Engenheiro de Software",
        description: "Especialista em código, arquitetura e lógica.",
        icon_ref: "Code2",
    },
    PersonaOption {
        id: "marketing",
        label: "Estrategista de Marketing",
        description: "Focado em crescimento, branding e mercado.",
        icon_ref: "TrendingUp",
    },
    PersonaOption {
        id: "educator",
        label: "Professor / Educador",
        description: "Didática excelente para explicar conceitos complexos.",
        icon_ref: "GraduationCap",
    },
    PersonaOption {
        id: "financier",
        label: "Analista Financeiro",
        description: "Especialista em investimentos, economia e negócios.",
        icon_ref: "DollarSign",
    },
    PersonaOption {
        id: "consultant",
        label: "Consultor de Negócios",
        description: "Visão estratégica para otimização de empresas.",
        icon_ref: "Briefcase",
    },
    PersonaOption {
        id: "chef",
        label: "Chef de Cozinha",
        description: "Criatividade culinária e conhecimento gastronômico.",
        icon_ref: "Utensils",
    },
    PersonaOption {
        id: "designer",
        label: "UX/UI Designer",
        description: "Focado em experiência do usuário e estética visual.",
        icon_ref: "Palette",
    },
    PersonaOption {
        id: "project_manager",
        label: "Gerente de Projetos",
        description: "Organização, metodologias ágeis e cronogramas.",
        icon_ref: "ClipboardList",
    },
    PersonaOption {
        id: "storyteller",
        label: "Escritor Criativo",
        description: "Narrativas envolventes, roteiros e ficção.",
        icon_ref: "BookOpen",
    },
    PersonaOption {
        id: "legal",
        label: "Consultor Jurídico",
        description: "Análise de contratos, leis e regulamentações.",
        icon_ref: "Scale",
    },
    PersonaOption {
        id: "scientist",
        label: "Cientista de Dados",
        description: "Análise estatística, machine learning e insights.",
        icon_ref: "Database",
    },
];

pub static GOALS: &[GoalOption] = &[
    GoalOption {
        id: "social_post",
        label: "Post Redes Sociais",
        description: "Instagram, LinkedIn, Twitter/X com hashtags.",
        icon_ref: "Share2",
    },
    GoalOption {
        id: "code",
        label: "Código / App",
        description: "Snippets, funções, aplicações completas ou scripts.",
        icon_ref: "Terminal",
    },
    GoalOption {
        id: "article",
        label: "Artigo / Blog Post",
        description: "Conteúdo longo, SEO otimizado e informativo.",
        icon_ref: "FileText",
    },
    GoalOption {
        id: "presentation",
        label: "Apresentação (Slides)",
        description: "Estrutura de tópicos para PowerPoint/Keynote.",
        icon_ref: "MonitorPlay",
    },
    GoalOption {
        id: "email",
        label: "E-mail Marketing",
        description: "Sequências de e-mail, newsletters ou cold calls.",
        icon_ref: "Mail",
    },
    GoalOption {
        id: "script",
        label: "Roteiro de Vídeo",
        description: "YouTube, TikTok, Reels com indicações visuais.",
        icon_ref: "Video",
    },
    GoalOption {
        id: "landing_page",
        label: "Estrutura Landing Page",
        description: "Copywriting e layout para alta conversão.",
        icon_ref: "Layout",
    },
    GoalOption {
        id: "business_plan",
        label: "Plano de Negócios",
        description: "Estratégia completa, SWOT e análise de mercado.",
        icon_ref: "PieChart",
    },
    GoalOption {
        id: "story",
        label: "História / Livro",
        description: "Enredo, desenvolvimento de personagens e capítulos.",
        icon_ref: "Book",
    },
    GoalOption {
        id: "summary",
        label: "Resumo Executivo",
        description: "Síntese de informações complexas para leitura rápida.",
        icon_ref: "FileMinus",
    },
];

/// Suggested tones of voice. Any free-text tone is equally valid.
pub const TONES: [&str; 8] = [
    "Profissional e Formal",
    "Amigável e Casual",
    "Persuasivo e Vendedor",
    "Inspirador e Motivacional",
    "Técnico e Detalhado",
    "Humorístico e Divertido",
    "Didático e Claro",
    "Urgente e Direto",
];

/// Output languages offered by the wizard.
pub const LANGUAGES: [&str; 4] = ["Português (Brasil)", "English (US)", "Español", "Français"];

fn find_by_id<T: CatalogEntry>(entries: &'static [T], id: &str) -> Option<&'static T> {
    entries.iter().find(|entry| entry.id() == id)
}

/// Look up a persona by its identifier.
pub fn find_persona(id: &str) -> Option<&'static PersonaOption> {
    find_by_id(PERSONAS, id)
}

/// Look up a goal by its identifier.
pub fn find_goal(id: &str) -> Option<&'static GoalOption> {
    find_by_id(GOALS, id)
}
