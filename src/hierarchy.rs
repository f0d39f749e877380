/// The three-level curriculum vocabulary that backs the filter cascade.
///
/// Held as an explicit ordered structure rather than a keyed map so that
/// iteration order and membership checks are fixed at compile time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Subject {
    pub(crate) name: &'static str,
    pub(crate) chapters: &'static [Chapter],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Chapter {
    pub(crate) name: &'static str,
    pub(crate) topics: &'static [&'static str],
}

impl Subject {
    pub(crate) fn find_chapter(&self, name: &str) -> Option<&'static Chapter> {
        self.chapters.iter().find(|c| c.name == name)
    }
}

pub(crate) fn find_subject(name: &str) -> Option<&'static Subject> {
    CURRICULUM.iter().find(|s| s.name == name)
}

/// Iterates every (subject, chapter, topic) leaf in curriculum order.
pub(crate) fn leaf_topics() -> impl Iterator<Item = (&'static str, &'static str, &'static str)> + Clone {
    CURRICULUM.iter().flat_map(|s| {
        s.chapters.iter().flat_map(move |c| {
            c.topics.iter().map(move |&t| (s.name, c.name, t))
        })
    })
}

pub(crate) static CURRICULUM: &[Subject] = &[
    Subject {
        name: "Programming Fundamentals",
        chapters: &[
            Chapter {
                name: "Variables & Data Types",
                topics: &["Primitive Types", "Type Conversion", "Constants"],
            },
            Chapter {
                name: "Control Structures",
                topics: &["if-else", "switch-case", "loops"],
            },
            Chapter {
                name: "Functions & Recursion",
                topics: &["Function declaration", "Parameters", "Recursion"],
            },
            Chapter {
                name: "Arrays and Strings",
                topics: &["One-dimensional", "Two-dimensional", "String manipulation"],
            },
            Chapter {
                name: "Object-Oriented Concepts",
                topics: &[
                    "Classes",
                    "Objects",
                    "Inheritance",
                    "Polymorphism",
                    "Encapsulation",
                ],
            },
        ],
    },
    Subject {
        name: "Data Structures",
        chapters: &[
            Chapter {
                name: "Linear Structures",
                topics: &["Arrays", "Linked Lists", "Stacks", "Queues"],
            },
            Chapter {
                name: "Non-Linear Structures",
                topics: &["Trees", "Heaps", "Graphs"],
            },
            Chapter {
                name: "Hashing",
                topics: &["Hash Tables", "Collision Resolution Techniques"],
            },
            Chapter {
                name: "Algorithms on DS",
                topics: &["Traversals", "Sorting with DS", "Searching techniques"],
            },
        ],
    },
    Subject {
        name: "Algorithms",
        chapters: &[
            Chapter {
                name: "Sorting & Searching",
                topics: &["Bubble Sort", "Merge Sort", "Quick Sort", "Binary Search"],
            },
            Chapter {
                name: "Greedy Algorithms",
                topics: &["Activity Selection", "Huffman Coding", "Kruskal's Algorithm"],
            },
            Chapter {
                name: "Divide and Conquer",
                topics: &["Merge Sort", "Binary Search", "Closest Pair Problem"],
            },
            Chapter {
                name: "Dynamic Programming",
                topics: &["Fibonacci", "Knapsack", "Matrix Chain Multiplication"],
            },
            Chapter {
                name: "Backtracking",
                topics: &["N-Queens", "Sudoku Solver", "Subset Sum"],
            },
        ],
    },
    Subject {
        name: "Computer Organization & Architecture",
        chapters: &[
            Chapter {
                name: "Number Systems & Boolean Algebra",
                topics: &["Binary", "Octal", "Hex", "Logic Gates"],
            },
            Chapter {
                name: "CPU Architecture",
                topics: &["ALU", "Registers", "Instruction Cycle"],
            },
            Chapter {
                name: "Memory Hierarchy",
                topics: &["RAM", "Cache", "Virtual Memory"],
            },
            Chapter {
                name: "Input/Output Organization",
                topics: &["Interrupts", "DMA", "I/O mapping"],
            },
            Chapter {
                name: "Pipelining & Parallelism",
                topics: &[
                    "Instruction Pipelining",
                    "Hazards",
                    "Superscalar Architecture",
                ],
            },
        ],
    },
    Subject {
        name: "Operating Systems",
        chapters: &[
            Chapter {
                name: "Introduction & Structures",
                topics: &["Kernel", "System Calls", "OS Services"],
            },
            Chapter {
                name: "Process Management",
                topics: &["Threads", "Scheduling", "Synchronization"],
            },
            Chapter {
                name: "Memory Management",
                topics: &["Paging", "Segmentation", "Virtual Memory"],
            },
            Chapter {
                name: "File Systems",
                topics: &["File Allocation", "Directory Structure"],
            },
            Chapter {
                name: "Deadlocks",
                topics: &["Detection", "Prevention", "Avoidance"],
            },
        ],
    },
];
