//! The fixed text of the Python programming lab manual.
//!
//! Everything the manual says lives here as constant data; the assembler only
//! decides how it is laid out.

/// One lesson of the manual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LessonRecord {
    pub title: &'static str,
    /// Topic shown in the table of contents.
    pub toc_topic: &'static str,
    /// Page the table of contents lists for the lesson.
    pub toc_page: &'static str,
    /// Notebook the lesson's code was taken from.
    pub source_name: &'static str,
    pub explanation: &'static str,
    /// Code listing, rendered verbatim.
    pub code: &'static str,
    pub summary: &'static str,
}

/// Title page heading. The line break splits it over two lines.
pub const MANUAL_TITLE: &str = "PYTHON PROGRAMMING\nLAB MANUAL";
pub const MANUAL_SUBTITLE: &str = "Fundamentals of Python Data Types and Operations";
pub const COURSE_INFO: &str = "Course: Python Programming\nDate: May 30, 2025";

pub const TOC_TITLE: &str = "TABLE OF CONTENTS";

/// Table of contents topic and page of the conclusion.
///
/// Contents page numbers are typed by hand and are not derived from the
/// rendered layout; treat them as approximate.
pub const CONCLUSION_TOC_TOPIC: &str = "Summary and Conclusion";
pub const CONCLUSION_TOC_PAGE: &str = "13";

pub const SOURCE_LABEL_PREFIX: &str = "Source File: ";
pub const CODE_LABEL: &str = "Code:";
pub const SUMMARY_LABEL: &str = "Summary and Analysis:";

pub const CONCLUSION_TITLE: &str = "COURSE SUMMARY AND CONCLUSION";

pub const CONCLUSION: &str = "
This comprehensive lab manual covered the fundamental data structures and operations in Python programming.
Through hands-on exercises, students have gained practical experience with:

CORE CONCEPTS MASTERED:
• Data Types: Understanding integers, floats, complex numbers, strings, booleans, and None type
• Type Conversion: Converting between different data types using built-in functions
• String Operations: Text manipulation, case conversion, and string methods
• Lists: Mutable sequences with indexing, slicing, and modification methods
• Tuples: Immutable sequences for fixed data storage
• Sets: Unique collections with mathematical operations

PROGRAMMING SKILLS DEVELOPED:
• Variable declaration and type checking
• User input handling and validation
• Data structure selection based on requirements
• Method chaining and functional programming concepts
• Problem-solving with appropriate data structures

PRACTICAL APPLICATIONS:
These fundamental concepts form the foundation for:
• Data analysis and manipulation
• Web development and API design
• Scientific computing and research
• Database operations and data modeling
• Algorithm implementation and optimization

NEXT STEPS:
Students should continue practicing these concepts and explore:
• Advanced data structures (dictionaries, nested structures)
• File handling and data persistence
• Object-oriented programming principles
• Error handling and debugging techniques
• Third-party libraries and frameworks

This lab manual serves as a reference guide for future Python programming endeavors.
";

/// Checklist printed after a successful run.
pub const FEATURES: &[&str] = &[
    "Professional title page",
    "Table of contents",
    "Detailed explanations for each lab",
    "Formatted code blocks",
    "Learning objectives and summaries",
    "Course conclusion and next steps",
    "Professional styling and formatting",
];

/// The lessons, in the order they appear in the manual.
pub const LESSONS: &[LessonRecord] = &[
    LessonRecord {
        title: "LAB 1: BASIC DATA TYPES AND TYPE CONVERSION",
        toc_topic: "Basic Data Types and Type Conversion",
        toc_page: "3",
        source_name: "start.ipynb",
        explanation: "
This lab introduces Python's fundamental data types including integers, floats, complex numbers,
strings, booleans, None type, and lists. Students will learn to check variable types using the
type() function and perform type conversions between different data types. The lab also covers
basic user input handling and arithmetic operations.

Learning Objectives:
• Understand Python's basic data types
• Learn type checking with type() function
• Practice type conversion methods
• Handle user input and perform basic operations
",
        code: r#"# Basic Data Types
a = 5
print(a)
print(type(a))

b = 3j
print(b)
print(type(b))

c = 222.22
print(c)
print(type(c))

d = "hello world"
print(d)
print(type(d))

e = True
print(e)
print(type(e))

f = False
print(f)
print(type(f))

g = None
print(g)
print(type(g))

h = [1, 2, 3, 4, 5]
print(h)
print(type(h))

print('\n')

# Type Conversion
d = int(c)
print(d)
print(type(d))

e = float(a)
print(e)
print(type(e))

print('\n')

cc = complex(a)
print(cc)
print(type(cc))

# User Input and Basic Operations
aa = input("Enter a number: ")
ss = int(aa)
print(ss+5)

print('\n')

bb = input("Enter a number: ")
kk = int(bb)
print(kk%5)

print('\n')

dd = input("Enter a number: ")
mm = int(dd)
print(mm/5)

ff = input("Enter a number: ")
nn = int(ff)
print(nn*5)"#,
        summary: "
Key Takeaways:
• Python supports multiple data types: int, float, complex, str, bool, NoneType, list
• Use type() function to check variable types
• Type conversion functions: int(), float(), complex(), str()
• input() function returns string by default, requiring conversion for numerical operations
• Python is dynamically typed - variables can change types during execution
",
    },
    LessonRecord {
        title: "LAB 2: STRING OPERATIONS",
        toc_topic: "String Operations",
        toc_page: "5",
        source_name: "second.ipynb",
        explanation: "
This lab focuses on string manipulation in Python. Students will learn various string methods
for case conversion, text cleaning, replacement, splitting, and counting occurrences. These
operations are fundamental for text processing and data cleaning tasks.

Learning Objectives:
• Master string case conversion methods
• Learn string manipulation techniques
• Practice text processing operations
• Understand string method chaining
",
        code: r#"# Getting User Input
a = input("Enter a String: ")
print(a)
b = input("Enter a String: ")
print(b)

# String Case Conversion Methods
print(a.upper())

print(a.lower())

print(a.capitalize())

print(a.strip())

# String Manipulation Methods
print(a)

print(a.replace("a", "b"))

print(a.split("a"))

print(a.split(" "))

print(a.count("a"))"#,
        summary: "
Key Takeaways:
• String methods for case conversion: upper(), lower(), capitalize(), strip()
• String manipulation methods: replace(), split(), count()
• These methods return new strings (strings are immutable)
• strip() removes whitespace from beginning and end
• split() creates lists from strings based on delimiters
",
    },
    LessonRecord {
        title: "LAB 3: LISTS OPERATIONS",
        toc_topic: "Lists Operations",
        toc_page: "7",
        source_name: "list.ipynb",
        explanation: "
This lab covers Python lists, which are ordered, mutable collections that can hold different
data types. Students will learn list creation, indexing, slicing, concatenation, and various
list methods essential for data manipulation.

Learning Objectives:
• Understand list creation and properties
• Master list indexing and slicing
• Learn list modification methods
• Practice list concatenation and extension
",
        code: r#"# Creating Lists
my_list = ['orange', 'mango', 'banana', 'apple']
print(my_list)
print(type(my_list))

# List Slicing
print(my_list[3:5])

# Creating and Concatenating Lists
my_list2 = ['two','three']

print(*(my_list + my_list2), sep ='\n')

# Adding Elements to Lists
my_list2.append('five')

my_list2.insert(0, 'one')
my_list2.insert(1, 'two')

# List Methods - Count and Index
print (my_list2.count('five'))
print (my_list2.count('one'))
print (my_list2.count('two'))

print (my_list2.index('five'))

# Extending Lists
my_list.extend(my_list2)
print(my_list)"#,
        summary: "
Key Takeaways:
• Lists are ordered, mutable collections enclosed in square brackets
• List slicing syntax: list[start:end] (end is exclusive)
• Methods for adding elements: append(), insert(), extend()
• Methods for finding elements: count(), index()
• Lists can be concatenated with + operator
• Use * operator with print() for unpacking list elements
",
    },
    LessonRecord {
        title: "LAB 4: TUPLES OPERATIONS",
        toc_topic: "Tuples Operations",
        toc_page: "9",
        source_name: "tuples.ipynb",
        explanation: "
This lab covers Python tuples, which are ordered, immutable collections. Unlike lists, tuples
cannot be modified after creation, making them useful for storing data that shouldn't change.
Students will learn tuple operations and conversions.

Learning Objectives:
• Understand tuple immutability and use cases
• Learn tuple creation and accessing methods
• Practice tuple methods and operations
• Master conversion between tuples and lists
",
        code: r#"# Tuple Basics
my_tuple = ('orange', 'mango', 'banana', 'apple')
print("\n--- Tuple Basics ---")
print(my_tuple)
print(type(my_tuple))
print(len(my_tuple))

# Accessing Tuple Elements
print("\n--- Accessing Elements ---")
print(my_tuple[0])
print(my_tuple[-1])
print(my_tuple[1:3])

# Modifying Tuples (Converting to List and Back)
duplicat_list = list(my_tuple)

duplicat_list.append('kiwi')
duplicat_list.insert(0, 'xyz')

updated_tuple = tuple(duplicat_list)
print(updated_tuple)

# Tuple Methods
print("\n--- Tuple Methods ---")
repeated_tuple = (1, 2, 3, 1, 2, 1)
print(repeated_tuple.count(1))
print(repeated_tuple.index(2))

# Tuple Concatenation
print("\n--- Tuple Concatenation ---")
tuple1 = (1, 2, 3)
tuple2 = ('a', 'b', 'c')
combined = tuple1 + tuple2
print(combined)

# Nested Tuples
print("\n--- Nested Tuples ---")
nested = ((1, 2), ('a', 'b'), (True, False))
print(nested)
print(nested[1][0])

# Type Conversions
print("\n--- Conversions ---")
list_to_convert = ['one', 'two', 'three']

converted_tuple = tuple(list_to_convert)
print(f"List {list_to_convert} converted to tuple: {converted_tuple}")
back_to_list = list(converted_tuple)
print(f"Tuple converted back to list: {back_to_list}")

# Printing Tuple Elements
print("\n--- Printing Tuple Elements Line by Line ---")
print(*my_tuple, sep='\n')"#,
        summary: "
Key Takeaways:
• Tuples are ordered, immutable collections enclosed in parentheses
• Cannot modify tuples directly - convert to list for modifications
• Limited methods: count() and index()
• Support concatenation with + operator
• Can contain nested structures
• Useful for fixed data that shouldn't change
• Convert between tuple() and list() functions
",
    },
    LessonRecord {
        title: "LAB 5: SETS OPERATIONS",
        toc_topic: "Sets Operations",
        toc_page: "11",
        source_name: "set.ipynb",
        explanation: "
This lab covers Python sets, which are unordered collections of unique elements. Sets are
useful for removing duplicates, membership testing, and mathematical set operations. Students
will also learn about frozensets.

Learning Objectives:
• Understand set properties and unique element constraint
• Learn set creation and modification methods
• Master mathematical set operations
• Practice with frozensets for immutable collections
",
        code: r#"# Creating Sets
print("\n--- Creating Sets ---")
set1 = {1, 2, 3, 4}
set2 = set(["apple", "banana", "cherry"])
empty_set = set()
print(f"Set1: {set1}")
print(f"Set2: {set2}")
print(f"Empty Set: {empty_set}")

# Adding Elements to Sets
print("\n--- Adding Elements ---")
set1.add(5)
set1.update([6, 7, 8])
print(f"Set1 after adding elements: {set1}")

# Removing Elements from Sets
print("\n--- Removing Elements ---")
set1.discard(8)
set1.remove(7)
print(f"Set1 after removing elements: {set1}")

# Accessing Elements in Sets
print("\n--- Accessing Elements ---")
for item in set2:
    print(item)

# Set Operations
print("\n--- Set Operations ---")
set_a = {1, 2, 3, 4}
set_b = {3, 4, 5, 6}
print(f"Union: {set_a | set_b}")
print(f"Intersection: {set_a & set_b}")
print(f"Difference (A - B): {set_a - set_b}")

# Clearing Sets
print("\n--- Clearing a Set ---")
set1.clear()
print(f"Set1 after clearing: {set1}")

# Frozensets (Immutable Sets)
print("\n--- Frozenset (Immutable Set) ---")
frozen = frozenset([1, 2, 3])
print(f"Frozenset: {frozen}")"#,
        summary: "
Key Takeaways:
• Sets store unique elements only (automatically remove duplicates)
• Created with curly braces {} or set() function
• Methods for adding: add(), update()
• Methods for removing: discard(), remove(), clear()
• Set operations: union (|), intersection (&), difference (-)
• Sets are unordered - no indexing
• Frozensets are immutable versions of sets
• Useful for membership testing and mathematical operations
",
    },
];
