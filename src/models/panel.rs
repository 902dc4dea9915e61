/// One of the three indicator panels. Each panel owns a chart and a technical-notes modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Live births per year
    Line,
    /// Infant mortality by race/colour
    Bar,
    /// Nursery need index breakdown
    Donut,
}

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
    tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
    exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

impl Panel {
    /// Short identifier used in element ids.
    pub fn code(&self) -> &'static str {
        match self {
            Panel::Line => "line",
            Panel::Bar => "bar",
            Panel::Donut => "donut",
        }
    }

    /// Card header text.
    pub fn heading(&self) -> &'static str {
        match self {
            Panel::Line => "Nascidos vivos",
            Panel::Bar => "Mortalidade infantil - por raça/cor",
            Panel::Donut => {
                "Detalhamento - INC - Índice de Necessidade de Creche Estados e Capitais"
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Panel::Line => "📈",
            Panel::Bar => "📊",
            Panel::Donut => "🍩",
        }
    }

    /// Data source caption shown below the chart.
    pub fn source(&self) -> &'static str {
        match self {
            Panel::Line => "Fonte: Ministério da Saúde - DATASUS (2010 - 2023)",
            Panel::Bar => "Fonte: Ministério da Saúde - DATASUS (2023)",
            Panel::Donut => {
                "Fonte: Fundação Maria Cecília Souto Vidigal (2023). Atualizado com base na PNAD."
            }
        }
    }

    pub fn notes_title(&self) -> &'static str {
        match self {
            Panel::Line => "Notas Técnicas - Nascidos vivos",
            Panel::Bar => "Notas Técnicas - Mortalidade infantil por raça/cor",
            Panel::Donut => "Notas Técnicas - INC - Índice de Necessidade de Creche",
        }
    }

    pub fn notes(&self) -> Vec<&'static str> {
        match self {
            Panel::Line => vec![
                LOREM,
                "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore \
                 eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt \
                 in culpa qui officia deserunt mollit anim id est laborum.",
                "Fontes primárias: Lorem Ipsum Nascidos Vivos (1994-presente) e Lorem Ipsum \
                 Óbitos Infantis (1996-presente).",
            ],
            Panel::Bar => vec![
                LOREM,
                "Fontes primárias: Lorem Ipsum Óbitos Infantis (1996-presente).",
            ],
            Panel::Donut => vec![
                LOREM,
                "O Índice de Necessidade de Creche (INC) é uma ferramenta que identifica \
                 crianças que mais precisam de vagas em creches públicas.",
                "Fontes primárias: Fundação Maria Cecília Souto Vidigal e PNAD.",
            ],
        }
    }

    pub fn all() -> &'static [Panel] {
        &[Panel::Line, Panel::Bar, Panel::Donut]
    }
}
