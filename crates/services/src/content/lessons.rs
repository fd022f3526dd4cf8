//! Canned lesson bodies, keyed by topic.

use microlearn_core::model::{Lesson, TopicId};

fn lesson(id: &str, name: &str, content: &str, examples: &[&str], tips: &[&str]) -> Lesson {
    Lesson {
        topic_id: TopicId::new(id),
        topic_name: name.to_owned(),
        content: content.to_owned(),
        examples: examples.iter().map(|s| (*s).to_owned()).collect(),
        tips: tips.iter().map(|s| (*s).to_owned()).collect(),
    }
}

/// Returns the canned lesson for a topic; unknown topics fall back to the
/// default topic (`arrays`).
pub(super) fn lesson_for(topic_id: &TopicId) -> Lesson {
    match topic_id.as_str() {
        "python" => python(),
        "ai" => ai(),
        "math" => math(),
        "web" => web(),
        "database" => database(),
        "react" => react(),
        "typescript" => typescript(),
        _ => arrays(),
    }
}

fn arrays() -> Lesson {
    lesson(
        "arrays",
        "Arrays",
        "Arrays are one of the most fundamental data structures in programming. An array is a collection of elements stored in contiguous memory locations, allowing you to store multiple values of the same type under a single variable name.\n\nKey concepts:\n- Zero-based indexing: The first element is at index 0\n- Fixed or dynamic size: Some languages allow fixed sizes, others are dynamic\n- Access time: O(1) for accessing elements by index\n- Insertion/Deletion: Can be O(n) if you need to shift elements\n\nArrays are used everywhere in programming - from storing user data to implementing complex algorithms. Understanding arrays is crucial for solving most coding problems efficiently.",
        &[
            "Python: my_array = [1, 2, 3, 4, 5]",
            "JavaScript: const arr = [\"apple\", \"banana\", \"cherry\"]",
            "Java: int[] numbers = {10, 20, 30, 40, 50}",
        ],
        &[
            "Use arrays when you need fast random access to elements",
            "Be careful with array bounds to avoid index out of range errors",
            "Consider using dynamic arrays (lists) when size is unknown",
            "Learn about multidimensional arrays for matrices and grids",
        ],
    )
}

fn python() -> Lesson {
    lesson(
        "python",
        "Python Basics",
        "Python is one of the most beginner-friendly programming languages. It emphasizes readability and simplicity, making it perfect for learning programming concepts.\n\nCore concepts:\n- Variables: Store data in memory with meaningful names\n- Data types: int, float, str, bool, list, dict, tuple, set\n- Control flow: if/else statements, loops (for, while)\n- Functions: Reusable blocks of code\n- Modules: Import and use external libraries\n\nPython's simple syntax allows you to focus on problem-solving rather than fighting with language syntax. It's used in web development, data science, AI/ML, and automation.",
        &[
            "Variables: x = 10, name = \"John\"",
            "Lists: fruits = [\"apple\", \"banana\", \"orange\"]",
            "Loop: for i in range(5): print(i)",
        ],
        &[
            "Use meaningful variable names for clarity",
            "Indentation is crucial in Python - it defines code blocks",
            "Use pip to install packages and libraries",
            "Virtual environments keep your projects organized",
        ],
    )
}

fn ai() -> Lesson {
    lesson(
        "ai",
        "AI Fundamentals",
        "Artificial Intelligence (AI) is transforming the world. It's the simulation of human intelligence by machines, enabling computers to learn from experience and perform tasks that typically require human intelligence.\n\nKey areas:\n- Machine Learning (ML): Systems that learn from data\n- Deep Learning (DL): Neural networks with multiple layers\n- Natural Language Processing (NLP): Understanding human language\n- Computer Vision: Processing and analyzing images\n- Reinforcement Learning: Learning through trial and error\n\nAI applications range from recommendation systems, autonomous vehicles, medical diagnosis, to personal assistants like ChatGPT.",
        &[
            "Supervised Learning: Training on labeled data",
            "Unsupervised Learning: Finding patterns in unlabeled data",
            "Transfer Learning: Using pre-trained models for new tasks",
        ],
        &[
            "Start with understanding basic probability and statistics",
            "Practice with datasets from Kaggle",
            "Learn libraries like TensorFlow, PyTorch, and Scikit-learn",
            "Understand the ethical implications of AI",
        ],
    )
}

fn math() -> Lesson {
    lesson(
        "math",
        "Math Essentials",
        "Mathematics is the foundation of computer science and programming. Understanding mathematical concepts helps you write efficient algorithms and solve complex problems.\n\nEssential topics:\n- Algebra: Variables, equations, and solving for unknowns\n- Geometry: Shapes, coordinates, and spatial relationships\n- Calculus: Rates of change and optimization\n- Linear Algebra: Vectors, matrices, and transformations\n- Discrete Math: Logic, set theory, and combinatorics\n\nFrom calculating algorithmic complexity to machine learning, math is everywhere in programming.",
        &[
            "Fibonacci sequence: f(n) = f(n-1) + f(n-2)",
            "Linear equations: y = mx + b",
            "Matrix multiplication for graphics and ML",
        ],
        &[
            "Practice problems to build intuition",
            "Understand Big O notation for algorithm analysis",
            "Learn about logarithms for understanding complexity",
            "Matrix math is essential for AI and graphics",
        ],
    )
}

fn web() -> Lesson {
    lesson(
        "web",
        "Web Development",
        "Web development is building applications for the internet. It involves creating the user interface (Frontend) and the server logic (Backend) that powers websites and web applications.\n\nComponents:\n- HTML: Structure and semantics\n- CSS: Styling and layout\n- JavaScript: Interactivity and logic\n- Backend: Server-side logic and databases\n- APIs: Communication between frontend and backend\n\nThe web stack has evolved significantly with frameworks like React, Vue, Angular making frontend development more efficient.",
        &[
            "HTML: <button>Click me</button>",
            "CSS: button { background-color: blue; }",
            "JavaScript: document.querySelector(\"button\").addEventListener(\"click\", () => {})",
        ],
        &[
            "Master semantic HTML for better SEO and accessibility",
            "Use CSS Grid and Flexbox for responsive layouts",
            "Learn asynchronous programming with async/await",
            "Understand the request-response cycle",
        ],
    )
}

fn database() -> Lesson {
    lesson(
        "database",
        "Databases",
        "Databases are systems for storing, organizing, and retrieving data efficiently. They're crucial for any application that needs to persist data.\n\nTypes:\n- Relational (SQL): Structured data with tables and relationships\n- NoSQL: Flexible schema (documents, key-value, graphs)\n- Time-series: Optimized for time-based data\n- Search: Full-text search capabilities\n\nUnderstanding databases helps you design scalable applications that can handle large amounts of data efficiently.",
        &[
            "SQL: SELECT * FROM users WHERE age > 18",
            "MongoDB: db.users.find({ age: { $gt: 18 } })",
            "Indexes: CREATE INDEX idx_age ON users(age)",
        ],
        &[
            "Normalize your database schema to reduce redundancy",
            "Use indexes to improve query performance",
            "Understand transactions and ACID properties",
            "Learn about database optimization and query planning",
        ],
    )
}

fn react() -> Lesson {
    lesson(
        "react",
        "React",
        "React is a JavaScript library for building user interfaces with reusable components. It makes building interactive UIs fast and efficient.\n\nCore concepts:\n- Components: Reusable UI pieces\n- JSX: Write HTML-like syntax in JavaScript\n- State: Data that changes over time\n- Props: Pass data between components\n- Hooks: Functions for managing state and effects\n- Virtual DOM: Efficient rendering\n\nReact powers millions of web applications, from Facebook to Netflix, due to its efficiency and developer experience.",
        &[
            "Function component: function MyButton() { return <button>Click</button> }",
            "useState hook: const [count, setCount] = useState(0)",
            "Props: <MyComponent name=\"John\" age={25} />",
        ],
        &[
            "Keep components small and focused",
            "Use custom hooks to share logic between components",
            "Understand the dependency array in useEffect",
            "Use React DevTools for debugging",
        ],
    )
}

fn typescript() -> Lesson {
    lesson(
        "typescript",
        "TypeScript",
        "TypeScript is a superset of JavaScript that adds static typing. It helps catch bugs at compile-time rather than runtime.\n\nFeatures:\n- Static typing: Define types for variables and functions\n- Interfaces: Define object shapes\n- Classes: Object-oriented programming\n- Generics: Reusable components with flexible types\n- Type inference: Automatic type detection\n- Enums: Named constants\n\nTypeScript makes large codebases more maintainable and helps catch errors before they reach users.",
        &[
            "Variable type: let name: string = \"John\"",
            "Function types: function add(a: number, b: number): number { return a + b }",
            "Interface: interface User { name: string; age: number }",
        ],
        &[
            "Use strict mode to catch more errors",
            "Learn about generics for flexible, reusable code",
            "Understand type unions and intersection types",
            "Use type guards for safe type narrowing",
        ],
    )
}
