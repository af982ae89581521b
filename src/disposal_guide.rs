use crate::waste_category::WasteCategory;

pub const INSTITUTION_NAME: &str = "Arizona State University";

#[derive(Debug, PartialEq)]
pub struct DropOff {
    pub name: &'static str,
    pub map_url: Option<&'static str>,
}

/// Campus-specific guidance for one category.
#[derive(Debug, PartialEq)]
pub struct InstitutionGuide {
    pub notes: &'static [&'static str],
    pub drop_offs: &'static [DropOff],
}

#[derive(Debug, PartialEq)]
pub struct DisposalGuide {
    pub category: WasteCategory,
    /// Wording used in "This image is classified as ...".
    pub display_name: &'static str,
    pub explanation: &'static str,
    pub instructions: &'static str,
    pub institution: InstitutionGuide,
}

static GUIDES: [DisposalGuide; 9] = [
    DisposalGuide {
        category: WasteCategory::Paper,
        display_name: "Paper",
        explanation: "Proper disposal of paper helps conserve forests, reduce landfill waste, and lower greenhouse gas emissions. When paper is recycled instead of thrown away, it can be turned into new paper products, saving energy and water used in production. Mismanaged paper waste contributes to growing landfills and unnecessary deforestation.",
        instructions: "Paper should be placed in recycling bins. This includes office paper, newspapers, notebooks, magazines, class worksheets, and any other paper products. Avoid disposing of paper with heavy contamination, such as food residue, and ensure that all paper recycled is clean and dry. Otherwise, place the paper in landfill as it can't be recycled.",
        institution: InstitutionGuide {
            notes: &["Paper items can be recycled in any recycling blue bin on campus, including in offices, classrooms, and residence halls on Arizona State University Campus locations."],
            drop_offs: &[],
        },
    },
    DisposalGuide {
        category: WasteCategory::Plastic,
        display_name: "Plastic",
        explanation: "Incorrect disposal of plastic leads to severe environmental damage, including ocean pollution and harm to wildlife. Recycling plastic reduces the need for new plastic production, conserving fossil fuels and lowering carbon emissions. Properly managing plastic waste is essential to limit its long-term persistence in ecosystems.",
        instructions: "Plastic items like bottles, containers, and packaging should be placed in plastic recycling bins. Please clean and rinse plastic items as needed before disposal. Avoid placing non-recyclable plastics, such as plastic bags or certain wrappers, in recycling bins as they may require separate collection or go to landfill if unusable.",
        institution: InstitutionGuide {
            notes: &["Plastic items can be recycled in any recycling blue bin on campus, including in offices, classrooms, and residence halls on Arizona State University Campus locations."],
            drop_offs: &[],
        },
    },
    DisposalGuide {
        category: WasteCategory::Glass,
        display_name: "Glass",
        explanation: "Glass is infinitely recyclable, meaning it can be reused without loss of quality. Proper disposal prevents it from breaking in landfills, reducing hazards for sanitation workers and wildlife. Recycling glass also saves raw materials like sand, soda ash, and limestone, and reduces energy consumption.",
        instructions: "Dispose of glass bottles and jars in glass recycling bins. Make sure they are empty and rinsed. Do not include mirrors, ceramics, or light bulbs, as these require specialized disposal methods.",
        institution: InstitutionGuide {
            notes: &["Glass items (jars, bottles) can be recycled in any recycling blue bin on campus after emptying all liquid contents and rinsing properly. Locations include offices, classrooms, and residence halls on Arizona State University Campus locations."],
            drop_offs: &[],
        },
    },
    DisposalGuide {
        category: WasteCategory::Metal,
        display_name: "Metal",
        explanation: "Metals like aluminum and steel can be recycled endlessly without losing quality. Proper disposal reduces mining demand, conserves natural resources, and prevents heavy metals from contaminating soil and water. Recycling metals also saves significant energy compared to producing new metal from ore.",
        instructions: "Aluminum cans, tin cans, and clean metal scraps should go in metal recycling bins. Avoid mixing with non-metal materials. Large metal items may need to be taken to specialized recycling centers.",
        institution: InstitutionGuide {
            notes: &["Metal items can be recycled in any recycling blue bin on campus, including in offices, classrooms, and residence halls on Arizona State University Campus locations."],
            drop_offs: &[],
        },
    },
    DisposalGuide {
        category: WasteCategory::Organic,
        display_name: "Organic Waste",
        explanation: "Organic waste such as food scraps and garden trimmings decomposes naturally and can produce nutrient-rich compost. Correct disposal reduces landfill methane emissions and supports soil health when composted. Mixing organics with other trash contaminates recycling streams and contributes to greenhouse gas emissions.",
        instructions: "Organic waste should go in compost bins or organic waste collections. This includes fruit and vegetable peels, coffee grounds, and garden waste. Avoid plastics or non-compostable materials in these bins.",
        institution: InstitutionGuide {
            notes: &["Organic items, such as leftover food, can be placed in any compost container on campus. Locations include:"],
            drop_offs: &[
                DropOff {
                    name: "Memorial Union - Food Court and Plaza",
                    map_url: Some("https://www.google.com/maps?&daddr=33.41777,-111.93438"),
                },
                DropOff {
                    name: "Hassayampa Dining Hall",
                    map_url: Some("https://www.google.com/maps?&daddr=33.41626,-111.92868"),
                },
                DropOff {
                    name: "Sun Devil Athletic Stadiums",
                    map_url: None,
                },
                DropOff {
                    name: "Residential halls",
                    map_url: None,
                },
                DropOff {
                    name: "Community kitchens and dining halls",
                    map_url: None,
                },
            ],
        },
    },
    DisposalGuide {
        category: WasteCategory::EWaste,
        display_name: "E-Waste",
        explanation: "Electronic waste contains valuable materials like gold and copper but also toxic substances like lead and mercury. Improper disposal can pollute soil and water and harm human health. Recycling e-waste recovers valuable metals and ensures hazardous components are handled safely.",
        instructions: "E-waste, including phones, batteries, and old computers, should be taken to designated e-waste recycling centers or collection points. Do not throw electronics in regular trash, as they require specialized handling.",
        institution: InstitutionGuide {
            notes: &["E-Waste items, including old computers and electronics, can be picked up at one of the following ASU locations after submitting a request:"],
            drop_offs: &[
                DropOff {
                    name: "Memorial Union",
                    map_url: Some("https://www.google.com/maps?&daddr=33.41777,-111.93438"),
                },
                DropOff {
                    name: "Fletcher Library",
                    map_url: Some("https://www.google.com/maps?&daddr=33.60739,-112.15988"),
                },
                DropOff {
                    name: "Engineering Center ET Drop Off",
                    map_url: Some("https://www.google.com/maps?&daddr=33.41882,-111.93242"),
                },
                DropOff {
                    name: "Health Futures Center ET Drop Off",
                    map_url: Some("https://www.google.com/maps/dir//33.657091,-111.949388/@33.6570637,-112.0317892,12z?entry=ttu&g_ep=EgoyMDI1MTAyOS4yIKXMDSoASAFQAw%3D%3D"),
                },
                DropOff {
                    name: "Quad 1 ET Drop Off",
                    map_url: Some("https://www.google.com/maps?&daddr=33.308275,-111.680445"),
                },
                DropOff {
                    name: "University Center ET Drop Off",
                    map_url: Some("https://www.google.com/maps?&daddr=33.452858,-112.072936"),
                },
                DropOff {
                    name: "University Services Building ET Drop Off",
                    map_url: Some("https://www.google.com/maps?&daddr=33.41156,-111.925606"),
                },
            ],
        },
    },
    DisposalGuide {
        category: WasteCategory::TextileClothing,
        display_name: "Textile or Clothing",
        explanation: "Discarded textiles can take decades to decompose and often end up in landfills. Recycling or donating clothes reduces textile waste, conserves resources, and supports charitable initiatives. Proper sorting of clothing prevents contamination of recycling streams and encourages sustainable reuse.",
        instructions: "Old or unwanted clothing should be placed in textile recycling bins, donation boxes, or second-hand stores. Ensure that the textile material is clean and dry before donation. Damaged fabrics may be repurposed as rags or sent to specialized textile recycling programs.",
        institution: InstitutionGuide {
            notes: &[
                "Old clothing or textile material can be donated at any donation site.",
                "ASU students can drop off donation items, including clothes, shoes, accessories, linens, and more, at the Big Brothers Big Sisters collection boxes.",
                "On campus ASU locations of donation boxes can be found here: https://cfo.asu.edu/ditch-the-dumpster",
            ],
            drop_offs: &[],
        },
    },
    DisposalGuide {
        category: WasteCategory::Landfill,
        display_name: "Landfill",
        explanation: "Items that cannot be recycled or composted should go to landfill, but minimizing this waste is crucial to reduce environmental impact. Proper disposal prevents contamination of soil and water and ensures that hazardous materials are handled safely. Reducing landfill waste overall encourages a circular economy.",
        instructions: "Landfill-bound items include heavily soiled packaging, certain plastics, and non-recyclable materials. These should be placed in regular trash bins for collection by municipal waste services. Avoid mixing recyclables with landfill waste whenever possible.",
        institution: InstitutionGuide {
            notes: &[
                "Items that can not be recycled, composted, reused, or donated can be discarded in any landfill container on ASU campus.",
                "Please consider the items that go into the landfill and consider using more environmentally-friendly materials in the future!",
            ],
            drop_offs: &[],
        },
    },
    DisposalGuide {
        category: WasteCategory::Cardboard,
        display_name: "Cardboard",
        explanation: "Proper disposal of cardboard helps reduce landfill waste and allows the material to be recycled into new packaging products. Recycling cardboard saves trees, energy, and water, and prevents pollution that can result from decomposing cardboard in landfills. Flattening and cleaning cardboard before disposal makes recycling more efficient and effective.",
        instructions: "Cardboard boxes and packaging should be placed in paper/cardboard recycling bins. Make sure to remove any plastic wrap, tape, or food residue. Heavily soiled cardboard, such as greasy pizza boxes, should instead go in organic or landfill bins, depending on the situation.",
        institution: InstitutionGuide {
            notes: &[
                "Smaller quantities of cardboard can be recycled in any recycling blue bins nearest to you. Please flatten out boxes before recycling.",
                "For cardboard sections that are greasy or contaminated with food residue, such as pizza boxes, please remove unusable sections and place in landfill.",
                "Larger quantities of cardboard can be picked up from ASU campus. Please submit a request here: https://webtma-support.asu.edu/FDMServiceRequest/Default.aspx",
            ],
            drop_offs: &[],
        },
    },
];

pub fn guide_for(category: WasteCategory) -> &'static DisposalGuide {
    let guide = &GUIDES[category.index()];
    debug_assert_eq!(guide.category, category);
    guide
}
