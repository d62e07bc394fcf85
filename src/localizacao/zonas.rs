//! Listas estáticas de bairros e municípios usadas no agrupamento por zona
//! geográfica do estado do Rio de Janeiro.

pub const ZONA_NORTE: &[&str] = &[
    "Abolição", "Acari", "Água Santa", "Alto da Boa Vista", "Anchieta", "Andaraí", "Bancários",
    "Barros Filho", "Benfica", "Bento Ribeiro", "Bonsucesso", "Brás de Pina", "Cachambi",
    "Cacuia", "Caju", "Campinho", "Cascadura", "Catumbi", "Cavalcanti", "Cidade Universitária",
    "Cocotá", "Coelho Neto", "Colégio", "Complexo do Alemão", "Cordovil", "Costa Barros",
    "Del Castilho", "Encantado", "Engenheiro Leal", "Engenho da Rainha", "Engenho de Dentro",
    "Engenho Novo", "Estácio", "Ilha do Governador", "Galeão", "Grajaú", "Guadalupe",
    "Higienópolis", "Honório Gurgel", "Inhaúma", "Irajá", "Jacaré", "Jacarezinho",
    "Jardim América", "Jardim Carioca", "Jardim Guanabara", "Lins de Vasconcelos", "Madureira",
    "Manguinhos", "Maracanã", "Maré", "Marechal Hermes", "Mangueira", "Maria da Graça", "Méier",
    "Moneró", "Olaria", "Oswaldo Cruz", "Parada de Lucas", "Parque Anchieta", "Parque Colúmbia",
    "Pavuna", "Penha", "Penha Circular", "Piedade", "Pilares", "Pitangueiras", "Portuguesa",
    "Praça da Bandeira", "Praia da Bandeira", "Quintino Bocaiúva", "Ramos", "Riachuelo",
    "Ribeiro", "Ricardo de Albuquerque", "Rocha", "Rocha Miranda", "Rocha Neto", "Sampaio",
    "Rio Comprido", "Vasco da Gama", "São Cristóvão", "São Francisco Xavier", "Tauá", "Tijuca",
    "Todos os Santos", "Tomás Coelho", "Turiaçu", "Vaz Lobo", "Vicente de Carvalho",
    "Vigário Geral", "Vila Isabel", "Vila Kosmos", "Vila da Penha", "Vista Alegre", "Zumbi",
];

pub const ZONA_OESTE: &[&str] = &[
    "Anil", "Bangu", "Barra da Tijuca", "Barra de Guaratiba", "Camorim", "Campo dos Afonsos",
    "Campo Grande", "Cidade de Deus", "Cosmos", "Curicica", "Deodoro", "Freguesia",
    "Gardênia Azul", "Gericinó", "Grumari", "Guaratiba", "Ilha de Guaratiba", "Inhoaíba",
    "Itanhangá", "Jabour", "Jacarepaguá", "Jardim Sulacap", "Joá", "Magalhães Bastos",
    "Paciência", "Padre Miguel", "Pechincha", "Pedra de Guaratiba", "Praça Seca", "Realengo",
    "Recreio dos Bandeirantes", "Santa Cruz", "Santíssimo", "Senador Camará",
    "Senador Vasconcelos", "Sepetiba", "Tanque", "Taquara", "Vargem Grande", "Vargem Pequena",
    "Vila Kennedy", "Vila Militar", "Vila Valqueire", "Rio das Pedras",
];

pub const ZONA_SUL: &[&str] = &[
    "Ipanema", "Botafogo", "Catete", "Copacabana", "Lagoa", "Flamengo", "Gávea", "Humaitá",
    "Jardim Botânico", "Laranjeiras", "Leme", "Urca", "Vidigal", "Cosme Velho", "São Conrado",
    "Rocinha", "Leblon", "Santo Amaro",
];

pub const BAIRROS_CENTRO: &[&str] = &[
    "Gamboa", "Centro do Rio", "Centro", "Lapa", "Saúde", "Cidade Nova", "Santa Teresa",
    "Estácio", "Catumbi", "Santo Cristo", "Paquetá", "Glória",
];

pub const BAIXADA_FLUMINENSE: &[&str] = &[
    "Nova Iguaçu", "Duque de Caxias", "Belford Roxo", "São João de Meriti", "Nilópolis",
    "Mesquita", "Magé", "Queimados", "Itaguaí", "Japeri", "Guapimirim", "Paracambi",
    "Seropédica", "Tanguá",
];

pub const NITEROI_SAO_GONCALO: &[&str] = &[
    "Niterói", "Icaraí", "Santa Rosa", "Fonseca", "Barreto", "Ingá", "São Francisco",
    "Piratininga", "Itaipu", "Várzea das Moças", "Cubango", "Cantagalo", "Vital Brazil",
    "São Domingos", "Baldeador", "Caramujo", "Engenhoca", "Santana", "Pé Pequeno",
    "Largo da Batalha", "Matapaca", "Ponta d'Areia", "São Lourenço", "Sapê", "Itacoatiara",
    "Camboinhas", "Maravista", "Maria Paula", "Santo Antônio", "São Gonçalo", "Alcântara",
    "Mutondo", "Neves", "Porto da Pedra", "Trindade", "Zé Garoto", "Boaçu", "Itaboraí",
    "Manilha",
];

pub const REGIAO_SERRANA: &[&str] = &[
    "Bom Jardim", "Cantagalo", "Carmo", "Cordeiro", "Duas Barras", "Macuco", "Nova Friburgo",
    "Petrópolis", "São José do Vale do Rio Preto", "São Sebastião do Alto",
    "Santa Maria Madalena", "Sumidouro", "Teresópolis", "Trajano de Morais", "Areal",
    "Comendador Levy Gasparian", "Paraiba do Sul", "Sapucaia", "Três Rios",
];

pub const REGIAO_DOS_LAGOS: &[&str] = &[
    "Cabo Frio", "Arraial do Cabo", "Araruama", "Saquarema", "Iguaba Grande",
    "São Pedro da Aldeia", "Maricá", "Rio das Ostras", "Armacao dos Buzios",
    "Casimiro de Abreu", "Conceição de Macabu", "Quissamã", "Macaé", "Carapebus",
];

pub const REGIAO_VOLTA_REDONDA: &[&str] = &[
    "Valença", "Vassouras", "Miguel Pereira", "Paty do Alferes", "Rio das Flores",
    "Barra do Piraí", "Piraí", "Pinheiral", "Volta Redonda", "Barra Mansa", "Resende",
    "Itatiaia", "Quatis", "Porto Real", "Rio Claro",
];

pub const REGIAO_CAMPOS: &[&str] = &[
    "Campos dos Goytacazes", "Cardoso Moreira", "São Fidélis", "São Francisco de Itabapoana",
    "São João da Barra", "Bom Jesus do Itabapoana", "Itaperuna", "Laje do Muriaé", "Natividade",
    "Porciúncula", "Sao Jose de Ubá", "Varre-Sai", "Cambuci", "Italva", "Itaocara", "Miracema",
    "Santo Antônio de Pádua",
];

/// Zonas pesquisadas por bairro, na ordem de precedência.
pub const ZONAS_POR_BAIRRO: &[(&str, &[&str])] = &[
    ("Zona Norte", ZONA_NORTE),
    ("Zona Oeste", ZONA_OESTE),
    ("Zona Sul", ZONA_SUL),
    ("Centro", BAIRROS_CENTRO),
    ("Baixada Fluminense", BAIXADA_FLUMINENSE),
    ("Niterói/São Gonçalo", NITEROI_SAO_GONCALO),
    ("Região Serrana", REGIAO_SERRANA),
    ("Região dos Lagos", REGIAO_DOS_LAGOS),
];

/// Regiões pesquisadas por município, quando o bairro não resolve.
pub const REGIOES_POR_CIDADE: &[(&str, &[&str])] = &[
    ("Baixada Fluminense", BAIXADA_FLUMINENSE),
    ("Niterói/São Gonçalo", NITEROI_SAO_GONCALO),
    ("Região Serrana", REGIAO_SERRANA),
    ("Região dos Lagos", REGIAO_DOS_LAGOS),
    ("Volta Redonda", REGIAO_VOLTA_REDONDA),
    ("Campos dos Goytacazes", REGIAO_CAMPOS),
];
