//! Canned multiple-choice quizzes, five questions per topic.

use microlearn_core::model::{QuizQuestion, TopicId};

fn question(id: &str, text: &str, options: [&str; 4], correct: usize) -> QuizQuestion {
    QuizQuestion {
        id: id.to_owned(),
        question: text.to_owned(),
        options: options.iter().map(|s| (*s).to_owned()).collect(),
        correct,
    }
}

/// Returns the canned quiz for a topic; unknown topics fall back to the
/// default topic (`arrays`).
pub(super) fn quiz_for(topic_id: &TopicId) -> Vec<QuizQuestion> {
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

fn arrays() -> Vec<QuizQuestion> {
    vec![
        question(
            "q1",
            "In a zero-indexed array, what is the index of the first element?",
            ["0", "1", "-1", "First"],
            0,
        ),
        question(
            "q2",
            "What is the time complexity of accessing an element by index in an array?",
            ["O(n)", "O(1)", "O(log n)", "O(n²)"],
            1,
        ),
        question(
            "q3",
            "Which of the following is NOT a common array operation?",
            ["Insert", "Delete", "Photosynthesis", "Sort"],
            2,
        ),
        question(
            "q4",
            "What happens when you try to access an array index that does not exist?",
            [
                "The array automatically expands",
                "It returns undefined or throws an error",
                "The program crashes",
                "It returns the first element",
            ],
            1,
        ),
        question(
            "q5",
            "In JavaScript, can array elements have different data types?",
            [
                "No, all elements must be the same type",
                "Yes, arrays are dynamic",
                "Only in some cases",
                "No information provided",
            ],
            1,
        ),
    ]
}

fn python() -> Vec<QuizQuestion> {
    vec![
        question(
            "q1",
            "What keyword is used to create a function in Python?",
            ["function", "def", "func", "define"],
            1,
        ),
        question(
            "q2",
            "Which of these is NOT a valid Python data type?",
            ["int", "string", "boolean", "char"],
            3,
        ),
        question(
            "q3",
            "How do you create a comment in Python?",
            ["// comment", "/* comment */", "# comment", "-- comment"],
            2,
        ),
        question(
            "q4",
            "What will print(type(5.0)) output?",
            [
                "<class \"int\">",
                "<class \"float\">",
                "<class \"number\">",
                "<class \"decimal\">",
            ],
            1,
        ),
        question(
            "q5",
            "How do you get the length of a list in Python?",
            ["size(list)", "length(list)", "len(list)", "list.length()"],
            2,
        ),
    ]
}

fn ai() -> Vec<QuizQuestion> {
    vec![
        question(
            "q1",
            "What is Machine Learning?",
            [
                "Programming a computer explicitly",
                "Systems that learn from data without being explicitly programmed",
                "Using machines for learning",
                "Writing code for learning purposes",
            ],
            1,
        ),
        question(
            "q2",
            "Which is a supervised learning task?",
            [
                "Clustering",
                "Dimensionality reduction",
                "Classification",
                "Anomaly detection",
            ],
            2,
        ),
        question(
            "q3",
            "What does NLP stand for?",
            [
                "Natural Language Processing",
                "Neural Learning Protocol",
                "Network Layer Protocol",
                "New Learning Pattern",
            ],
            0,
        ),
        question(
            "q4",
            "Which technique uses multiple layers of neural networks?",
            [
                "Shallow learning",
                "Deep learning",
                "Surface learning",
                "Linear learning",
            ],
            1,
        ),
        question(
            "q5",
            "What is a neural network inspired by?",
            [
                "Computer networks",
                "Biological neurons in the brain",
                "Network protocols",
                "Data networks",
            ],
            1,
        ),
    ]
}

fn math() -> Vec<QuizQuestion> {
    vec![
        question(
            "q1",
            "What is the slope of the line y = 2x + 3?",
            ["2", "3", "5", "-2"],
            0,
        ),
        question(
            "q2",
            "What is the next number in the Fibonacci sequence: 1, 1, 2, 3, 5, 8, ?",
            ["11", "12", "13", "14"],
            2,
        ),
        question(
            "q3",
            "What is the derivative of x² with respect to x?",
            ["x", "2x", "x³", "1"],
            1,
        ),
        question(
            "q4",
            "How many degrees are in a circle?",
            ["180", "270", "360", "400"],
            2,
        ),
        question(
            "q5",
            "What is the square root of 144?",
            ["10", "11", "12", "13"],
            2,
        ),
    ]
}

fn web() -> Vec<QuizQuestion> {
    vec![
        question(
            "q1",
            "What does HTML stand for?",
            [
                "Hyper Text Markup Language",
                "High Tech Modern Language",
                "Home Tool Markup Language",
                "Hyperlinks and Text Markup Language",
            ],
            0,
        ),
        question(
            "q2",
            "What is the purpose of CSS?",
            [
                "To structure web pages",
                "To add styling and layout to web pages",
                "To handle server-side logic",
                "To store data",
            ],
            1,
        ),
        question(
            "q3",
            "Which HTML tag is used for the largest heading?",
            ["<h6>", "<h1>", "<heading>", "<title>"],
            1,
        ),
        question(
            "q4",
            "What is the purpose of JavaScript in web development?",
            [
                "To replace CSS",
                "To add interactivity and dynamic behavior",
                "To handle all backend logic",
                "To structure web pages",
            ],
            1,
        ),
        question(
            "q5",
            "What does DOM stand for?",
            [
                "Document Object Model",
                "Data Object Management",
                "Dynamic Output Model",
                "Document Output Manager",
            ],
            0,
        ),
    ]
}

fn database() -> Vec<QuizQuestion> {
    vec![
        question(
            "q1",
            "What does SQL stand for?",
            [
                "Structured Query Language",
                "Simple Query Language",
                "Standard Query Language",
                "Special Query Language",
            ],
            0,
        ),
        question(
            "q2",
            "Which database type uses tables with rows and columns?",
            [
                "NoSQL",
                "Graph Database",
                "Relational Database",
                "Document Database",
            ],
            2,
        ),
        question(
            "q3",
            "What is a primary key?",
            [
                "The first column in a table",
                "A unique identifier for each row",
                "The password to access the database",
                "The main table in a database",
            ],
            1,
        ),
        question(
            "q4",
            "What does ACID stand for in database transactions?",
            [
                "Accuracy, Consistency, Integrity, Durability",
                "Atomicity, Consistency, Isolation, Durability",
                "Authorization, Control, Integrity, Design",
                "Accessibility, Compatibility, Integration, Distribution",
            ],
            1,
        ),
        question(
            "q5",
            "What is normalization in databases?",
            [
                "Making all data lowercase",
                "Organizing data to reduce redundancy",
                "Creating a database",
                "Backing up data",
            ],
            1,
        ),
    ]
}

fn react() -> Vec<QuizQuestion> {
    vec![
        question(
            "q1",
            "What is React?",
            [
                "A Python library",
                "A JavaScript library for building UIs",
                "A database management system",
                "A server-side framework",
            ],
            1,
        ),
        question(
            "q2",
            "What does JSX stand for?",
            [
                "Java Syntax Extension",
                "JavaScript XML",
                "JavaScript Syntax Extra",
                "Java and XML",
            ],
            1,
        ),
        question(
            "q3",
            "What is state in React?",
            [
                "The app status",
                "Data that changes over time",
                "A static variable",
                "A component property",
            ],
            1,
        ),
        question(
            "q4",
            "What is props in React?",
            [
                "Properties passed from parent to child components",
                "Program properties",
                "Properties of the server",
                "Python properties",
            ],
            0,
        ),
        question(
            "q5",
            "What are React Hooks?",
            [
                "Ways to hook into React features",
                "Server endpoints",
                "Database hooks",
                "CSS styling hooks",
            ],
            0,
        ),
    ]
}

fn typescript() -> Vec<QuizQuestion> {
    vec![
        question(
            "q1",
            "What is TypeScript?",
            [
                "A new programming language",
                "A superset of JavaScript with static typing",
                "A type of JavaScript library",
                "A database language",
            ],
            1,
        ),
        question(
            "q2",
            "How do you define a variable with a string type in TypeScript?",
            [
                "var name = \"John\"",
                "let name: string = \"John\"",
                "const name: String = \"John\"",
                "name: string = \"John\"",
            ],
            1,
        ),
        question(
            "q3",
            "What is an interface in TypeScript?",
            [
                "A user interface",
                "A contract that defines the shape of an object",
                "A visual design",
                "A communication protocol",
            ],
            1,
        ),
        question(
            "q4",
            "What are generics in TypeScript?",
            [
                "Generic variables",
                "Types that are reusable for multiple data types",
                "General programming concepts",
                "Default values",
            ],
            1,
        ),
        question(
            "q5",
            "When is TypeScript code compiled to?",
            ["Java", "C++", "JavaScript", "Python"],
            2,
        ),
    ]
}
